use crate::areas::repository::Repository;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

/// Shortest abbreviation accepted for an object id
const MIN_PREFIX_LENGTH: usize = 4;

impl Repository {
    /// Write the raw content of an object to the output
    pub fn cat_file(&mut self, object: &str) -> anyhow::Result<()> {
        let object_id = self.resolve_object_id(object)?;
        let content = self.database().get(&object_id)?;

        self.writer().write_all(&content)?;

        Ok(())
    }

    /// Resolve a full or abbreviated object id to a stored object
    fn resolve_object_id(&self, object: &str) -> anyhow::Result<ObjectId> {
        if object.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(object.to_string());
        }

        if object.len() < MIN_PREFIX_LENGTH {
            anyhow::bail!("Not a valid object name {object}");
        }

        let candidates = self.database().find_objects_by_prefix(object)?;
        match candidates.as_slice() {
            [] => anyhow::bail!("Not a valid object name {object}"),
            [object_id] => Ok(object_id.clone()),
            _ => {
                let candidates = candidates
                    .iter()
                    .map(|candidate| format!("  {candidate}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                anyhow::bail!(
                    "short object ID {object} is ambiguous\nThe candidates are:\n{candidates}"
                )
            }
        }
    }
}
