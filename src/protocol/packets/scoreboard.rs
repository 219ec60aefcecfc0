//! Scoreboard packets
//!
//! Objectives, score rows and scoreboard identity bindings. Score rows may
//! reference entities, so the bridge inspects these too.

use crate::error::Result;
use crate::protocol::packets::{PacketType, id};
use crate::protocol::types::{
    VarI32, VarI64, VarU32, read_i32, read_string, read_u8, write_i32, write_string, write_u8,
};
use std::io::{Read, Write};

/// Score action: modify or add rows
pub const SCORE_ACTION_MODIFY: u8 = 0;
/// Score action: remove rows
pub const SCORE_ACTION_REMOVE: u8 = 1;

/// Scoreboard identity action: register an entity behind a row
pub const IDENTITY_ACTION_REGISTER: u8 = 0;
/// Scoreboard identity action: clear the entity behind a row
pub const IDENTITY_ACTION_CLEAR: u8 = 1;

/// Score row identity: a player entity
pub const IDENTITY_PLAYER: u8 = 1;
/// Score row identity: a non-player entity
pub const IDENTITY_ENTITY: u8 = 2;
/// Score row identity: a fake player (plain text row)
pub const IDENTITY_FAKE_PLAYER: u8 = 3;

/// Removes an objective from the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoveObjective {
    /// Name of the removed objective
    pub objective_name: String,
}

impl PacketType for RemoveObjective {
    const ID: u32 = id::REMOVE_OBJECTIVE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(RemoveObjective {
            objective_name: read_string(reader)?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.objective_name, writer)
    }
}

/// Shows an objective in a scoreboard display slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetDisplayObjective {
    /// Display slot (sidebar, list, belowname)
    pub display_slot: String,
    /// Name of the objective shown
    pub objective_name: String,
    /// Display name of the objective
    pub display_name: String,
    /// Criteria of the objective
    pub criteria_name: String,
    /// Sort order of the rows
    pub sort_order: i32,
}

impl PacketType for SetDisplayObjective {
    const ID: u32 = id::SET_DISPLAY_OBJECTIVE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(SetDisplayObjective {
            display_slot: read_string(reader)?,
            objective_name: read_string(reader)?,
            display_name: read_string(reader)?,
            criteria_name: read_string(reader)?,
            sort_order: VarI32::read(reader)?.0,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_string(&self.display_slot, writer)?;
        write_string(&self.objective_name, writer)?;
        write_string(&self.display_name, writer)?;
        write_string(&self.criteria_name, writer)?;
        VarI32(self.sort_order).write(writer)?;
        Ok(())
    }
}

/// A single score row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreboardEntry {
    /// Scoreboard-internal row ID
    pub entry_id: i64,
    /// Objective the row belongs to
    pub objective_name: String,
    /// Score value of the row
    pub score: i32,
    /// What the row identifies (player, entity, fake player); only on the
    /// wire when rows are modified
    pub identity_type: u8,
    /// Unique ID of the identified entity; absent for fake players
    pub entity_unique_id: i64,
    /// Display name of a fake-player row
    pub display_name: String,
}

impl ScoreboardEntry {
    fn read<R: Read>(reader: &mut R, action: u8) -> Result<Self> {
        let entry_id = VarI64::read(reader)?.0;
        let objective_name = read_string(reader)?;
        let score = read_i32(reader)?;
        let mut entry = ScoreboardEntry {
            entry_id,
            objective_name,
            score,
            ..Default::default()
        };

        if action == SCORE_ACTION_MODIFY {
            entry.identity_type = read_u8(reader)?;
            if entry.identity_type == IDENTITY_FAKE_PLAYER {
                entry.display_name = read_string(reader)?;
            } else {
                entry.entity_unique_id = VarI64::read(reader)?.0;
            }
        }
        Ok(entry)
    }

    fn write<W: Write>(&self, writer: &mut W, action: u8) -> Result<()> {
        VarI64(self.entry_id).write(writer)?;
        write_string(&self.objective_name, writer)?;
        write_i32(self.score, writer)?;
        if action == SCORE_ACTION_MODIFY {
            write_u8(self.identity_type, writer)?;
            if self.identity_type == IDENTITY_FAKE_PLAYER {
                write_string(&self.display_name, writer)?;
            } else {
                VarI64(self.entity_unique_id).write(writer)?;
            }
        }
        Ok(())
    }
}

/// Modifies or removes score rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetScore {
    /// Whether rows are modified or removed
    pub action: u8,
    /// The rows changed
    pub entries: Vec<ScoreboardEntry>,
}

impl PacketType for SetScore {
    const ID: u32 = id::SET_SCORE;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let action = read_u8(reader)?;
        let count = VarU32::read(reader)?.0;
        let mut entries = Vec::new();
        for _ in 0..count {
            entries.push(ScoreboardEntry::read(reader, action)?);
        }
        Ok(SetScore { action, entries })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.action, writer)?;
        VarU32(self.entries.len() as u32).write(writer)?;
        for entry in &self.entries {
            entry.write(writer, self.action)?;
        }
        Ok(())
    }
}

/// A binding between a scoreboard row and an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreboardIdentityEntry {
    /// Scoreboard-internal row ID
    pub scoreboard_id: i64,
    /// Unique ID of the bound entity; only on the wire when registering
    pub entity_unique_id: i64,
}

/// Registers or clears the entities behind score rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetScoreboardIdentity {
    /// Whether bindings are registered or cleared
    pub action: u8,
    /// The bindings changed
    pub entries: Vec<ScoreboardIdentityEntry>,
}

impl PacketType for SetScoreboardIdentity {
    const ID: u32 = id::SET_SCOREBOARD_IDENTITY;

    fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let action = read_u8(reader)?;
        let count = VarU32::read(reader)?.0;
        let mut entries = Vec::new();
        for _ in 0..count {
            let scoreboard_id = VarI64::read(reader)?.0;
            let entity_unique_id = if action == IDENTITY_ACTION_REGISTER {
                VarI64::read(reader)?.0
            } else {
                0
            };
            entries.push(ScoreboardIdentityEntry {
                scoreboard_id,
                entity_unique_id,
            });
        }
        Ok(SetScoreboardIdentity { action, entries })
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_u8(self.action, writer)?;
        VarU32(self.entries.len() as u32).write(writer)?;
        for entry in &self.entries {
            VarI64(entry.scoreboard_id).write(writer)?;
            if self.action == IDENTITY_ACTION_REGISTER {
                VarI64(entry.entity_unique_id).write(writer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_set_score_mixed_identities() {
        let packet = SetScore {
            action: SCORE_ACTION_MODIFY,
            entries: vec![
                ScoreboardEntry {
                    entry_id: 1,
                    objective_name: "kills".to_string(),
                    score: 3,
                    identity_type: IDENTITY_PLAYER,
                    entity_unique_id: 1,
                    display_name: String::new(),
                },
                ScoreboardEntry {
                    entry_id: 2,
                    objective_name: "kills".to_string(),
                    score: 0,
                    identity_type: IDENTITY_FAKE_PLAYER,
                    entity_unique_id: 0,
                    display_name: "spectators".to_string(),
                },
            ],
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = SetScore::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }

    #[test]
    fn test_identity_clear_omits_unique_ids() {
        let packet = SetScoreboardIdentity {
            action: IDENTITY_ACTION_CLEAR,
            entries: vec![ScoreboardIdentityEntry {
                scoreboard_id: 7,
                entity_unique_id: 0,
            }],
        };

        let mut buffer = Vec::new();
        packet.write(&mut buffer).unwrap();

        let decoded = SetScoreboardIdentity::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(packet, decoded);
    }
}
