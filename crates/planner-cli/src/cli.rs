//! CLI command handler wiring the session controller to the terminal.

use anyhow::{bail, Result};
use log::info;
use planner_core::{export_text, PlanGenerator, Session, SessionState};

use crate::args::Args;
use crate::renderer::TerminalRenderer;

/// Command handler owning the session and the terminal renderer.
pub struct Cli<G> {
    session: Session<G>,
    renderer: TerminalRenderer,
}

impl<G: PlanGenerator> Cli<G> {
    /// Create a handler around a session and renderer.
    pub fn new(session: Session<G>, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Run one generation: submit the request, then render, print or save
    /// the outcome according to the arguments.
    pub async fn generate(&mut self, args: &Args) -> Result<()> {
        let request = args.to_request();
        self.session.submit(&request).await?;

        match self.session.state() {
            SessionState::Ready { plan } => {
                if args.plain {
                    print!("{}", export_text(plan));
                    println!();
                } else {
                    self.renderer.render(&plan.to_string())?;
                }

                if args.save {
                    let path = self.session.save(&args.output_dir)?;
                    info!("Exported plan to {}", path.display());
                    self.renderer
                        .status(&format!("Saved lesson plan to {}", path.display()));
                }
                Ok(())
            }
            SessionState::Failed { message } => bail!("{message}"),
            // submit() always settles the session before returning
            SessionState::Idle | SessionState::Loading { .. } => {
                bail!("generation did not complete")
            }
        }
    }
}
