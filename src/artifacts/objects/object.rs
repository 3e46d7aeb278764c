use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// Build the typed payload `<type> <size>\0<content>` that object IDs are derived from
pub fn pack(object_type: ObjectType, content: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), content.len());

    let mut payload = Vec::with_capacity(header.len() + content.len());
    payload.extend_from_slice(header.as_bytes());
    payload.extend_from_slice(content);

    Bytes::from(payload)
}

/// Hash a typed payload into its object ID
pub fn hash(object_type: ObjectType, content: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(pack(object_type, content));

    ObjectId::from_digest(hasher.finalize().as_slice())
}

pub trait Object {
    fn object_type(&self) -> ObjectType;

    fn content(&self) -> &[u8];

    fn object_id(&self) -> ObjectId {
        hash(self.object_type(), self.content())
    }
}
