//! Working-directory resolution helpers.

use std::{env, path::PathBuf};

use super::errors::FatalError;

/// Working directory for the new session plus whether the caller chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWorkdir {
    pub path: PathBuf,
    pub explicit: bool,
}

/// Resolve the working directory: `--homedir` wins over `--workdir`, and a
/// missing or empty `--workdir` means the caller's current directory.
pub fn resolve_workdir(
    homedir: bool,
    workdir: Option<PathBuf>,
) -> Result<ResolvedWorkdir, FatalError> {
    if homedir {
        let path = dirs::home_dir()
            .ok_or_else(|| FatalError::Usage("could not determine the home directory".into()))?;
        return Ok(ResolvedWorkdir {
            path,
            explicit: true,
        });
    }

    match workdir {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(ResolvedWorkdir {
            path: dir,
            explicit: true,
        }),
        _ => {
            let path = env::current_dir().map_err(|err| {
                FatalError::Usage(format!("could not determine the current directory: {err}"))
            })?;
            Ok(ResolvedWorkdir {
                path,
                explicit: false,
            })
        }
    }
}
