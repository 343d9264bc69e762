/*!
Effects and events of the profile form.

The form session stays synchronous: instead of calling remote services or the
router itself, it returns an `Effect` for the caller to carry out. Results of
asynchronous work come back in as a `FormEvent`.

- `Effect::Submit`   -> hand to `SubmitExecutor::spawn`
- `Effect::Navigate` -> hand to the router
- `FormEvent::SubmitFinished` -> feed to `ProfileForm::apply`
*/

use std::fmt;

use crate::submit::{SubmitOutcome, SubmitRequest, SubmitTicket};

/// Navigation targets the form can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Email editing lives on the identification step.
    Identification,
    /// Profile saved; continue checkout.
    NextStep,
}

impl Route {
    pub fn page(&self) -> &'static str {
        match self {
            Route::Identification => "store.checkout.identification",
            Route::NextStep => "store.checkout.shipping",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit {
        ticket: SubmitTicket,
        request: SubmitRequest,
    },
    Navigate(Route),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Submit { ticket, .. } => write!(f, "Submit(ticket={})", ticket.0),
            Effect::Navigate(route) => write!(f, "Navigate({})", route.page()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SubmitFinished {
        ticket: SubmitTicket,
        outcome: SubmitOutcome,
    },
}
