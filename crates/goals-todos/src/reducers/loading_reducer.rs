//! Loading Reducer

use crate::actions::Action;
use mini_redux::{pure, Reducer};

/// Loading flag: true until the first data arrives from the service
pub fn reducer() -> impl Reducer<bool, Action> {
    pure(|| true, |loading: &bool, action: &Action| match action {
        Action::ReceiveData { .. } => false,
        _ => *loading,
    })
}
