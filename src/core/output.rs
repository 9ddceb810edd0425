// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! "Save Output" support
//!
//! Writes the text shown in a preview dialog to disk. Uses an atomic
//! temp-file-then-rename so a failed save never leaves a truncated file.

use atomic_write_file::AtomicWriteFile;
use std::{io::Write, path::Path};
use tracing::info;

use crate::core::SaveError;

/// Writes `text` verbatim to `path`
///
/// # Errors
///
/// Returns `SaveError::Write` if the file cannot be opened, written or
/// committed. The target is left untouched in that case.
pub fn save_output(path: &Path, text: &str) -> Result<(), SaveError> {
    let wrap = |source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::options().open(path).map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.commit().map_err(wrap)?;

    info!("Saved output to {}", path.display());
    Ok(())
}
