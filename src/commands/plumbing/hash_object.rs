use crate::areas::repository::Repository;
use crate::artifacts::objects::object::hash;
use crate::artifacts::objects::object_type::ObjectType;
use std::path::Path;

impl Repository {
    /// Print the object id of a file's content, optionally storing it
    pub fn hash_object(
        &mut self,
        object_path: &Path,
        object_type: ObjectType,
        write: bool,
    ) -> anyhow::Result<()> {
        if write && object_type != ObjectType::Blob {
            anyhow::bail!("only blob objects can be written, not {object_type}");
        }

        let object_data = self.workspace().read_file(object_path)?;
        let object_id = hash(object_type, &object_data);

        if write {
            self.database().put(&object_id, &object_data)?;
        }

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
