use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::process::ExitCode;
use twig::areas::repository::Repository;
use twig::commands::porcelain::merge::MergeOptions;
use twig::errors::{TwigError, as_twig_error};

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small local-first version-control system",
    long_about = "twig tracks snapshots of a working directory, with branches, \
    three-way merges and remotes living on the same machine.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Create a repository in the current directory",
        long_about = "This command creates the .twig directory, an initial commit and the master branch."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command records a new commit on top of the active branch with the staged additions and removals."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or stage its removal")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(name = "log", about = "Show the history of the active branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "This command restores a file from HEAD (`checkout -- <file>`), \
        from a commit (`checkout <commit> -- <file>`), or switches to a branch (`checkout <branch>`)."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when a file is given")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "reset", about = "Move the active branch to a commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the active branch",
        long_about = "This command merges the given branch into the active one, \
        fast-forwarding when possible and writing conflict markers when both sides changed a file."
    )]
    Merge {
        #[arg(index = 1)]
        branch: String,
        #[arg(long = "no-ff", help = "Create a merge commit even when a fast-forward is possible")]
        no_ff: bool,
    },
    #[command(name = "add-remote", about = "Register a remote repository")]
    AddRemote {
        #[arg(index = 1)]
        name: String,
        #[arg(index = 2, help = "Path to the remote repository or its .twig directory")]
        path: String,
    },
    #[command(name = "rm-remote", about = "Forget a remote repository")]
    RmRemote {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "push", about = "Append the active branch's history to a remote branch")]
    Push {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(name = "fetch", about = "Copy a remote branch into <branch>@<remote>")]
    Fetch {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
    #[command(name = "pull", about = "Fetch a remote branch and merge it")]
    Pull {
        #[arg(index = 1)]
        remote: String,
        #[arg(index = 2)]
        branch: String,
    },
}

impl Commands {
    fn is_read_only(&self) -> bool {
        matches!(
            self,
            Commands::Log | Commands::GlobalLog | Commands::Find { .. } | Commands::Status
        )
    }
}

fn run(command: &Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;
    let pwd = pwd.to_string_lossy();

    if let Commands::Init = command {
        let mut repository = Repository::create(&pwd, Box::new(std::io::stdout()))?;
        repository.init()?;
        return repository.persist();
    }

    let mut repository = Repository::open(&pwd, Box::new(std::io::stdout()))?;

    match command {
        Commands::Init => anyhow::bail!(TwigError::DuplicateInit),
        Commands::Add { file } => repository.add(file)?,
        Commands::Commit { message } => repository.commit(message)?,
        Commands::Rm { file } => repository.rm(file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(message)?,
        Commands::Status => repository.status()?,
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(None, file)?,
            (Some(commit), Some(file)) => repository.checkout_file(Some(commit), file)?,
            (Some(branch), None) => repository.checkout_branch(branch)?,
            (None, None) => anyhow::bail!(TwigError::UsageError("Incorrect operands.".to_string())),
        },
        Commands::Branch { name } => repository.branch(name)?,
        Commands::RmBranch { name } => repository.rm_branch(name)?,
        Commands::Reset { commit } => repository.reset(commit)?,
        Commands::Merge { branch, no_ff } => {
            repository.merge(branch, &MergeOptions { no_ff: *no_ff })?;
        }
        Commands::AddRemote { name, path } => repository.add_remote(name, path)?,
        Commands::RmRemote { name } => repository.rm_remote(name)?,
        Commands::Push { remote, branch } => repository.push(remote, branch)?,
        Commands::Fetch { remote, branch } => {
            repository.fetch(remote, branch)?;
        }
        Commands::Pull { remote, branch } => {
            repository.pull(remote, branch)?;
        }
    }

    if command.is_read_only() {
        return Ok(());
    }

    repository.persist()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match as_twig_error(&error) {
            Some(twig_error) => {
                println!("{twig_error}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}
