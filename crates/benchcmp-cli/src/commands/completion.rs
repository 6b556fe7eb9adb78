// Dweve BenchCmp - Benchmark variant comparison
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shell completion generation - Tab completion for various shells

use crate::cli::Cli;
use crate::error::CliError;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Writes the completion script for `shell` to stdout.
///
/// # Errors
///
/// Never fails today; the signature matches the other commands.
pub fn completion(shell: Shell) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// How to install the completion script for `shell`.
pub fn installation_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Bash: add to ~/.bashrc\neval \"$(benchcmp completion bash)\"",
        Shell::Zsh => {
            "# Zsh: save into a directory on $fpath\nbenchcmp completion zsh > ~/.zsh/completions/_benchcmp"
        }
        Shell::Fish => {
            "# Fish:\nbenchcmp completion fish > ~/.config/fish/completions/benchcmp.fish"
        }
        Shell::PowerShell => {
            "# PowerShell: add to $PROFILE\nbenchcmp completion powershell | Out-String | Invoke-Expression"
        }
        Shell::Elvish => "# Elvish: add to ~/.elvish/rc.elv\neval (benchcmp completion elvish)",
        _ => "Unsupported shell",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installation_instructions() {
        assert!(installation_instructions(Shell::Bash).contains("benchcmp completion bash"));
        assert!(installation_instructions(Shell::Fish).contains("benchcmp.fish"));
    }
}
