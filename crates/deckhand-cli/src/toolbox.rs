//! Shared handles to the external tool clients

use deckhand_tools::{CommandRunner, Docker, Helm, Kind, Kubectl};

/// One client per external tool, all sharing a runner.
///
/// Commands take the whole box so the runner can be swapped out for a
/// scripted one in tests.
pub struct Toolbox<R> {
    pub docker: Docker<R>,
    pub kind: Kind<R>,
    pub kubectl: Kubectl<R>,
    pub helm: Helm<R>,
}

impl<R: CommandRunner + Clone> Toolbox<R> {
    pub fn new(runner: R) -> Self {
        Self {
            docker: Docker::new(runner.clone()),
            kind: Kind::new(runner.clone()),
            kubectl: Kubectl::new(runner.clone()),
            helm: Helm::new(runner),
        }
    }
}
