use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::remotes::Remotes;
use crate::areas::storage::{RepositoryStateRef, STATE_VERSION, Storage};
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use crate::errors::TwigError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::Path;

/// A loaded, locked repository
///
/// Commands are implemented as methods on `Repository`. They mutate the
/// in-memory areas; nothing reaches the state file until `persist` is called,
/// which the command line does only after a command succeeded.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    storage: Storage,
    database: Database,
    refs: Refs,
    index: Index,
    remotes: Remotes,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Fails with `NotInitialized` when `path` holds no twig repository.
    pub fn open(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("failed to resolve repository path {:?}", path))?;
        let metadata_path = path.join(crate::REPOSITORY_DIR);

        if !metadata_path.is_dir() {
            anyhow::bail!(TwigError::NotInitialized);
        }

        let storage = Storage::open(&metadata_path)?;
        if !storage.exists() {
            anyhow::bail!(TwigError::NotInitialized);
        }
        let state = storage.load()?;

        Ok(Repository {
            writer: RefCell::new(writer),
            storage,
            database: state.database,
            refs: state.refs,
            index: state.index,
            remotes: state.remotes,
            workspace: Workspace::new(path.clone().into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    /// Create the metadata directory of a repository rooted at `path`
    ///
    /// The new repository holds the initial commit and a `master` branch
    /// pointing at it; its state reaches the disk with `persist`. Fails with
    /// `DuplicateInit` when a repository already exists.
    pub fn create(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("failed to create directory {:?}", path))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("failed to resolve repository path {:?}", path))?;
        let metadata_path = path.join(crate::REPOSITORY_DIR);

        if metadata_path.exists() {
            anyhow::bail!(TwigError::DuplicateInit);
        }
        std::fs::create_dir_all(&metadata_path)
            .with_context(|| format!("failed to create directory {:?}", metadata_path))?;

        let storage = Storage::open(&metadata_path)?;
        let mut database = Database::default();
        let root = database.store_commit(Commit::initial());
        let refs = Refs::new(BranchName::try_parse(crate::DEFAULT_BRANCH.to_string())?, root);

        Ok(Repository {
            writer: RefCell::new(writer),
            storage,
            database,
            refs,
            index: Index::default(),
            remotes: Remotes::default(),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    /// Open the repository a remote designates, discarding its output
    pub fn open_remote(root: &Path) -> anyhow::Result<Self> {
        match Self::open(&root.to_string_lossy(), Box::new(std::io::sink())) {
            Err(error) if error.downcast_ref::<TwigError>() == Some(&TwigError::NotInitialized) => {
                Err(TwigError::RemoteNotFound.into())
            }
            result => result,
        }
    }

    /// Open the repository a registered remote designates
    ///
    /// Fails with `RemoteIsLocal` when the remote leads back to this repository.
    pub fn open_named_remote(&self, name: &str) -> anyhow::Result<Self> {
        let root = self.remotes.resolve(name, &self.path)?;
        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve remote path {:?}", root))?;

        if root == self.path() {
            anyhow::bail!(TwigError::RemoteIsLocal);
        }

        Self::open_remote(&root)
    }

    /// Store the in-memory state
    pub fn persist(&self) -> anyhow::Result<()> {
        self.storage.store(&RepositoryStateRef {
            version: STATE_VERSION,
            database: &self.database,
            refs: &self.refs,
            index: &self.index,
            remotes: &self.remotes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn database_mut(&mut self) -> &mut Database {
        &mut self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn remotes(&self) -> &Remotes {
        &self.remotes
    }

    pub fn remotes_mut(&mut self) -> &mut Remotes {
        &mut self.remotes
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Classify the working tree against the index and HEAD
    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        Status::new(self).initialize()
    }

    /// Head commit digest of the active branch
    pub fn head_oid(&self) -> anyhow::Result<ObjectId> {
        self.refs.head().cloned()
    }

    /// Head commit of the active branch
    pub fn head_commit(&self) -> anyhow::Result<&Commit> {
        let head = self.refs.head()?;
        self.database.load_commit(head)
    }

    /// Files a branch removed: dropped by its head, plus pending removals
    /// when it is the active branch
    pub fn removed_files(&self, branch: &str) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let mut removed = self.refs.removed(&self.database, branch)?;

        if self.refs.is_current_branch(branch) {
            removed.extend(
                self.index
                    .removal()
                    .iter()
                    .map(|(path, oid)| (path.clone(), oid.clone())),
            );
        }

        Ok(removed)
    }

    /// Normalize a user-supplied file path
    pub fn relative_path(&self, file_path: &str) -> anyhow::Result<String> {
        self.workspace
            .normalize(file_path)
            .ok_or_else(|| TwigError::UsageError(format!("Invalid path: {file_path}")).into())
    }
}
