//! Durable document store backed by a single JSON snapshot file.
//!
//! The whole entity set is held in memory and rewritten on every mutation.
//! Writes go to a `.tmp` sibling which is then renamed over the snapshot, so
//! a crash mid-write leaves the previous snapshot intact.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::RwLock;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::datastore::{
    Entity, Key,
    ports::{DatastoreError, DatastoreResult, DocumentStore},
};

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    entities: Vec<&'a Entity>,
}

/// Document store persisting all entities to one JSON file.
#[derive(Debug)]
pub struct JsonFileDatastore {
    dir: Dir,
    file_name: String,
    entities: RwLock<BTreeMap<Key, Entity>>,
}

impl JsonFileDatastore {
    /// Opens the snapshot at `path`, starting empty when the file does not
    /// exist yet. The parent directory must exist.
    ///
    /// # Errors
    ///
    /// Returns [`DatastoreError::Io`] when the directory cannot be opened or
    /// the file cannot be read, and [`DatastoreError::Snapshot`] when the
    /// file is not a valid snapshot.
    pub fn open(path: &Utf8Path) -> DatastoreResult<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "snapshot path must include a file name",
                )
            })?
            .to_owned();
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        let snapshot = read_snapshot(&dir, &file_name)?;
        debug!(
            path = %path,
            entities = snapshot.entities.len(),
            "opened json snapshot store"
        );

        let entities = snapshot
            .entities
            .into_iter()
            .map(|entity| (entity.key().clone(), entity))
            .collect();
        Ok(Self {
            dir,
            file_name,
            entities: RwLock::new(entities),
        })
    }

    fn persist(&self, entities: &BTreeMap<Key, Entity>) -> DatastoreResult<()> {
        let snapshot = SnapshotRef {
            entities: entities.values().collect(),
        };
        let encoded = serde_json::to_vec_pretty(&snapshot)?;
        let temp_name = format!("{}.tmp", self.file_name);
        let mut file = self.dir.create(&temp_name)?;
        file.write_all(&encoded)?;
        file.sync_all()?;
        drop(file);
        self.dir.rename(&temp_name, &self.dir, &self.file_name)?;
        Ok(())
    }
}

fn read_snapshot(dir: &Dir, file_name: &str) -> DatastoreResult<Snapshot> {
    match dir.read_to_string(file_name) {
        Ok(contents) if contents.trim().is_empty() => Ok(Snapshot::default()),
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Snapshot::default()),
        Err(err) => Err(err.into()),
    }
}

impl DocumentStore for JsonFileDatastore {
    fn get(&self, key: &Key) -> DatastoreResult<Option<Entity>> {
        let entities = self
            .entities
            .read()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        Ok(entities.get(key).cloned())
    }

    fn put(&self, entity: Entity) -> DatastoreResult<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        let key = entity.key().clone();
        let previous = entities.insert(key.clone(), entity);
        if let Err(err) = self.persist(&entities) {
            // Keep memory in step with the snapshot that is still on disk.
            match previous {
                Some(old) => entities.insert(key, old),
                None => entities.remove(&key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn delete(&self, key: &Key) -> DatastoreResult<()> {
        let mut entities = self
            .entities
            .write()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        let Some(removed) = entities.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.persist(&entities) {
            entities.insert(key.clone(), removed);
            return Err(err);
        }
        Ok(())
    }

    fn query(&self, kind: &str) -> DatastoreResult<Vec<Entity>> {
        let entities = self
            .entities
            .read()
            .map_err(|err| DatastoreError::poisoned(&err))?;
        Ok(entities
            .values()
            .filter(|entity| entity.key().kind() == kind)
            .cloned()
            .collect())
    }
}
