// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Menu Controller
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Main-menu state machine.
//!
//! ```text
//! MainMenu --1..4--> Theory | Apparatus | Procedure | Precautions --> MainMenu
//! MainMenu --5-----> Simulation --> MainMenu
//! MainMenu --6-----> Exit
//! MainMenu --other-> MainMenu
//! ```

use std::io::{BufRead, Write};

use crate::screens::Screen;
use crate::simulation::run_simulation;
use dielectric_core::input::{is_integer_token, prompt, TokenReader};
use dielectric_types::config::LabConfig;
use dielectric_types::error::LabResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Theory,
    Apparatus,
    Procedure,
    Precautions,
    Simulation,
    Exit,
}

impl MenuState {
    /// State selected by a main-menu token, `None` for anything outside 1–6.
    pub fn from_choice(token: &str) -> Option<MenuState> {
        match token.parse::<i64>().ok()? {
            1 => Some(MenuState::Theory),
            2 => Some(MenuState::Apparatus),
            3 => Some(MenuState::Procedure),
            4 => Some(MenuState::Precautions),
            5 => Some(MenuState::Simulation),
            6 => Some(MenuState::Exit),
            _ => None,
        }
    }

    /// Transition for one step. Only `MainMenu` consumes input; `None` means
    /// input is exhausted and ends the session.
    pub fn next(self, input: Option<&str>) -> MenuState {
        match (self, input) {
            (MenuState::Exit, _) => MenuState::Exit,
            (MenuState::MainMenu, None) => MenuState::Exit,
            (MenuState::MainMenu, Some(token)) => {
                MenuState::from_choice(token).unwrap_or(MenuState::MainMenu)
            }
            _ => MenuState::MainMenu,
        }
    }

    pub fn screen(self) -> Option<Screen> {
        match self {
            MenuState::Theory => Some(Screen::Theory),
            MenuState::Apparatus => Some(Screen::Apparatus),
            MenuState::Procedure => Some(Screen::Procedure),
            MenuState::Precautions => Some(Screen::Precautions),
            _ => None,
        }
    }
}

fn write_main_menu<W: Write>(out: &mut W) -> LabResult<()> {
    writeln!(
        out,
        "\n===== Dielectric Constant and Curie Temperature Simulation ====="
    )?;
    writeln!(out, "1. Show Theory")?;
    writeln!(out, "2. Show Apparatus")?;
    writeln!(out, "3. Show Procedure")?;
    writeln!(out, "4. Show Precautions")?;
    writeln!(out, "5. Start Simulation")?;
    writeln!(out, "6. Exit")?;
    prompt(out, "Enter your choice: ")
}

/// Drive the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    config: &LabConfig,
    input: &mut TokenReader<R>,
    out: &mut W,
) -> LabResult<()> {
    let registry = config.registry()?;
    let mut state = MenuState::MainMenu;

    loop {
        state = match state {
            MenuState::MainMenu => {
                write_main_menu(out)?;
                let token = input.next_token()?;
                let next = state.next(token.as_deref());
                if next == MenuState::MainMenu {
                    if token.as_deref().is_some_and(is_integer_token) {
                        writeln!(out, "Invalid choice. Try again.")?;
                    } else {
                        writeln!(out, "Invalid input. Please enter a number.")?;
                    }
                    input.discard_line();
                }
                next
            }
            MenuState::Simulation => {
                run_simulation(config, &registry, input, out)?;
                state.next(None)
            }
            MenuState::Exit => {
                writeln!(out, "Exiting program.")?;
                return Ok(());
            }
            info => {
                if let Some(screen) = info.screen() {
                    screen.write(out)?;
                }
                info.next(None)
            }
        };
    }
}
