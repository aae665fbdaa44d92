//! Gateway work requested by the category screen
//!
//! The screen model never awaits anything itself. State transitions
//! return an `Effect`, the caller runs it against a gateway, and the
//! resulting `Outcome` is fed back through `CategoryScreen::resolve`.

use crate::error::Result;
use crate::remote::{Ack, CategoryGateway, Saved};
use crate::types::{Category, CategoryDraft, CategoryPatch};

use super::model::CategoryScreen;

/// A gateway call the screen wants made. Mutations carry the sequence
/// number of the dialog that issued them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-fetch the full list
    Reload,
    Create {
        draft: CategoryDraft,
        dialog: u64,
    },
    Update {
        id: u64,
        patch: CategoryPatch,
        dialog: u64,
    },
    Delete {
        id: u64,
        dialog: u64,
    },
}

/// Result of running an `Effect`, tagged with what it was for
#[derive(Debug)]
pub enum Outcome {
    Loaded(Result<Vec<Category>>),
    Created {
        dialog: u64,
        result: Result<Saved>,
    },
    Updated {
        id: u64,
        dialog: u64,
        result: Result<Saved>,
    },
    Deleted {
        id: u64,
        dialog: u64,
        result: Result<Ack>,
    },
}

impl Effect {
    /// Perform the call. Failures are carried in the outcome, not returned.
    pub async fn run(self, gateway: &dyn CategoryGateway) -> Outcome {
        match self {
            Effect::Reload => Outcome::Loaded(gateway.list_all().await),
            Effect::Create { draft, dialog } => Outcome::Created {
                dialog,
                result: gateway.create(&draft).await,
            },
            Effect::Update { id, patch, dialog } => Outcome::Updated {
                id,
                dialog,
                result: gateway.update(id, &patch).await,
            },
            Effect::Delete { id, dialog } => Outcome::Deleted {
                id,
                dialog,
                result: gateway.delete(id).await,
            },
        }
    }
}

impl CategoryScreen {
    /// Run `effect` and every follow-up effect it produces until the
    /// screen is quiescent (a successful mutation is followed by a reload)
    pub async fn settle(&mut self, gateway: &dyn CategoryGateway, effect: Effect) {
        let mut next = Some(effect);
        while let Some(effect) = next.take() {
            let outcome = effect.run(gateway).await;
            next = self.resolve(outcome);
        }
    }
}
