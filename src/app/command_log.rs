//! Protokoll der ausgeführten Connector-Commands.
//!
//! Der Controller schreibt jeden Command vor dem Dispatch hinein; das Replay
//! fasst das Protokoll am Ende pro Command-Art zusammen.

use indexmap::IndexMap;

use super::ConnectorCommand;

/// Begrenztes Protokoll ausgeführter Commands in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<ConnectorCommand>,
    /// Anzahl der wegen der Obergrenze verworfenen Einträge
    dropped: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt `command` an. Ist das Protokoll voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &ConnectorCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            let half = Self::MAX_ENTRIES / 2;
            self.entries.drain(..half);
            self.dropped += half;
            log::debug!("Command-Log voll, {} Einträge verworfen", half);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgezeichneten Commands, verworfene eingeschlossen.
    pub fn total_recorded(&self) -> usize {
        self.entries.len() + self.dropped
    }

    pub fn entries(&self) -> &[ConnectorCommand] {
        &self.entries
    }

    /// Zählt die gehaltenen Einträge pro Command-Art, in Reihenfolge des ersten Auftretens.
    pub fn summary(&self) -> IndexMap<&'static str, usize> {
        let mut counts = IndexMap::new();
        for command in &self.entries {
            *counts.entry(command.kind()).or_insert(0) += 1;
        }
        counts
    }
}
