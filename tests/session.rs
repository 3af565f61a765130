mod common;

use std::fs;

use bndlview::ui::{Command, InputEvent, LoopState, Session};
use bndlview::{Error, Extractor, open};
use common::{BundleBuilder, ScriptedInput};

const TERMINAL: (u16, u16) = (80, 24);

fn sample() -> Vec<u8> {
    BundleBuilder::new()
        .entry("player", "png", b"\x89PNG fake image data")
        .entry("README", "", b"read me")
        .entry("level01", "map", &[7u8; 3000])
        .build()
}

fn output(session: &Session<&Vec<u8>, Vec<u8>>) -> String {
    String::from_utf8_lossy(session.renderer().get_ref()).into_owned()
}

#[test]
fn arrows_wrap_and_quit_stops_reading() {
    let bundle = sample();
    let table = open(&bundle).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&bundle, dir.path());
    let mut session = Session::new(table, extractor, Vec::new(), "sample.bndl", TERMINAL);

    let mut input = ScriptedInput::keys([
        Command::MoveDown,
        Command::MoveDown,
        Command::MoveDown,
        Command::MoveUp,
        Command::Other,
        Command::Quit,
        Command::MoveDown,
    ]);
    session.run(&mut input).unwrap();

    assert_eq!(session.state(), LoopState::Stopped);
    assert_eq!(session.selection(), Some(2));
    assert_eq!(input.remaining(), 1);

    let out = output(&session);
    assert!(out.contains("sample.bndl"));
    assert!(out.contains("level01.map"));
    assert!(out.contains(" 3.0kB"));
}

#[test]
fn extract_writes_selected_entry_and_keeps_selection() {
    let bundle = sample();
    let table = open(&bundle).unwrap();
    let expected = table.get(2).unwrap().clone();
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&bundle, dir.path());
    let mut session = Session::new(table, extractor, Vec::new(), "sample.bndl", TERMINAL);

    let mut input = ScriptedInput::keys([
        Command::MoveUp,
        Command::Extract,
        Command::Other,
        Command::Quit,
    ]);
    session.run(&mut input).unwrap();

    assert_eq!(session.selection(), Some(2));
    let written = fs::read(dir.path().join("level01.map")).unwrap();
    let start = expected.offset as usize;
    assert_eq!(written, &bundle[start..start + expected.size as usize]);

    let out = output(&session);
    assert!(out.contains(" Success "));
    assert!(out.contains("Extracted level01.map"));
}

#[test]
fn failed_extraction_is_reported_and_session_continues() {
    let bundle = sample();
    let before = bundle.clone();
    let table = open(&bundle).unwrap();
    let table_before = table.clone();
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&bundle, dir.path().join("missing"));
    let mut session = Session::new(table, extractor, Vec::new(), "sample.bndl", TERMINAL);

    let mut input = ScriptedInput::keys([
        Command::MoveDown,
        Command::Extract,
        Command::MoveDown,
        Command::MoveDown,
        Command::Quit,
    ]);
    session.run(&mut input).unwrap();

    // The first MoveDown after the failure only dismissed the notification
    assert_eq!(session.selection(), Some(2));
    assert_eq!(session.table(), &table_before);
    assert_eq!(bundle, before);

    let out = output(&session);
    assert!(out.contains(" Error "));
    assert!(out.contains("Could not extract README"));
}

#[test]
fn empty_bundle_ignores_movement_and_extraction() {
    let bundle = BundleBuilder::new().build();
    let table = open(&bundle).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&bundle, dir.path());
    let mut session = Session::new(table, extractor, Vec::new(), "empty.bndl", TERMINAL);

    let mut input = ScriptedInput::keys([
        Command::MoveUp,
        Command::MoveDown,
        Command::Extract,
        Command::Quit,
    ]);
    session.run(&mut input).unwrap();

    assert_eq!(session.state(), LoopState::Stopped);
    assert_eq!(session.selection(), None);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

    let out = output(&session);
    assert!(!out.contains("Success"));
    assert!(!out.contains("Error"));
}

#[test]
fn resize_recenters_without_moving_selection() {
    let bundle = sample();
    let table = open(&bundle).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&bundle, dir.path());
    let mut session = Session::new(table, extractor, Vec::new(), "sample.bndl", TERMINAL);
    let before = session.renderer().layout();

    let mut input = ScriptedInput::new([
        InputEvent::Key(Command::MoveDown),
        InputEvent::Resize(120, 40),
        InputEvent::Key(Command::Quit),
    ]);
    session.run(&mut input).unwrap();

    let after = session.renderer().layout();
    assert_eq!(session.selection(), Some(1));
    assert!(after.x > before.x);
    assert!(after.y > before.y);
}

#[test]
fn exhausted_input_surfaces_as_terminal_error() {
    let bundle = sample();
    let table = open(&bundle).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(&bundle, dir.path());
    let mut session = Session::new(table, extractor, Vec::new(), "sample.bndl", TERMINAL);

    let err = session
        .run(&mut ScriptedInput::keys([Command::MoveDown]))
        .unwrap_err();
    assert!(matches!(err, Error::Terminal(_)));
    assert_eq!(session.state(), LoopState::Running);
}
