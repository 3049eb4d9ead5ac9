//! Authorship gate - decides whether a requester may create or edit a post.
//!
//! An ownership mismatch on edit is not an error: the requester is routed
//! to the post's detail view and nothing else happens. Validation problems
//! are surfaced to users; ownership problems are not.

use uuid::Uuid;

use crate::domain::Post;

/// The identity attached to a request, as far as the gate is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester {
    Anonymous,
    Authenticated(Uuid),
}

/// Gate decision for the create flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAccess {
    /// Hand the requester to the login boundary.
    LoginRequired,
    /// Proceed. The new post's author is this id, taken from the
    /// authenticated identity and never from the submitted payload.
    Granted { author_id: Uuid },
}

/// Gate decision for the edit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAccess {
    /// Hand the requester to the login boundary.
    LoginRequired,
    /// Ownership mismatch: route to the post's detail view.
    RedirectToPost(Uuid),
    /// The requester authored the post; the edit may proceed.
    Granted,
}

/// Any authenticated identity may create; there is no ownership to check.
pub fn create_access(requester: Requester) -> CreateAccess {
    match requester {
        Requester::Anonymous => CreateAccess::LoginRequired,
        Requester::Authenticated(user_id) => CreateAccess::Granted { author_id: user_id },
    }
}

/// Only the author may edit; everyone else lands on the detail view.
pub fn edit_access(requester: Requester, post: &Post) -> EditAccess {
    match requester {
        Requester::Anonymous => EditAccess::LoginRequired,
        Requester::Authenticated(user_id) if user_id == post.author_id => EditAccess::Granted,
        Requester::Authenticated(_) => EditAccess::RedirectToPost(post.id),
    }
}
