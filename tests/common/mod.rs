#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use byteorder::{LittleEndian, WriteBytesExt};

use bndlview::bndl::{BundleHeader, EXT_LEN, FILE_ENTRY_SIZE, NAME_LEN};
use bndlview::ui::{Command, InputEvent, InputSource};

/// Assembles bundle images in memory
#[derive(Default)]
pub struct BundleBuilder {
    entries: Vec<(String, String, Vec<u8>)>,
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, ext: &str, body: &[u8]) -> Self {
        assert!(name.len() <= NAME_LEN && ext.len() <= EXT_LEN);
        self.entries
            .push((name.to_string(), ext.to_string(), body.to_vec()));
        self
    }

    /// Header, file table, then the bodies back to back
    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(BundleHeader::SIGNATURE);
        out.write_u16::<LittleEndian>(BundleHeader::VERSION).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u32::<LittleEndian>(self.entries.len() as u32)
            .unwrap();
        out.write_u32::<LittleEndian>(0).unwrap();

        let mut offset = (BundleHeader::SIZE + self.entries.len() * FILE_ENTRY_SIZE) as u32;
        for (name, ext, body) in &self.entries {
            let mut n = [0u8; NAME_LEN];
            n[..name.len()].copy_from_slice(name.as_bytes());
            let mut e = [0u8; EXT_LEN];
            e[..ext.len()].copy_from_slice(ext.as_bytes());
            out.extend_from_slice(&n);
            out.extend_from_slice(&e);
            out.write_u32::<LittleEndian>(body.len() as u32).unwrap();
            out.write_u32::<LittleEndian>(offset).unwrap();
            offset += body.len() as u32;
        }

        for (_, _, body) in &self.entries {
            out.extend_from_slice(body);
        }
        out
    }
}

/// Feeds a fixed list of events, then fails so a runaway loop ends the test
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn keys(commands: impl IntoIterator<Item = Command>) -> Self {
        Self::new(commands.into_iter().map(InputEvent::Key))
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted"))
    }
}
