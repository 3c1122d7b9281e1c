//! # Reducer
//!
//! State transitions for the collection store. The reducer is the only place
//! where [`CollectionState`] changes, and it is a pure function:
//! `(State, Command) -> State`.

use super::command::Command;
use super::state::{next_free_id, CollectionState};
use crate::model::{User, UserId};
use std::collections::HashSet;

/// Transforms state based on commands.
///
/// Implementations must not perform side effects. Network calls, success
/// notices and closing dialogs belong to whoever issues the command.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: Clone + Default + Send + 'static;

    /// The command type this reducer handles.
    type Command: Send + 'static;

    /// Process a command and return the new state.
    fn reduce(state: Self::State, command: Self::Command) -> Self::State;
}

/// Reducer for the user collection.
pub struct UserReducer;

impl Reducer for UserReducer {
    type State = CollectionState;
    type Command = Command;

    fn reduce(mut state: CollectionState, command: Command) -> CollectionState {
        match command {
            Command::SetUsers(users) => CollectionState {
                users: with_unique_ids(users),
                ..state
            },
            Command::AddUser(user) => {
                let user = if state.contains(user.id) {
                    let id = state.next_id();
                    user.renumbered(id)
                } else {
                    user
                };
                state.users.insert(0, user);
                state
            }
            Command::UpdateUser(user) => {
                if let Some(slot) = state.users.iter_mut().find(|u| u.id == user.id) {
                    *slot = user;
                }
                state
            }
            Command::DeleteUser(id) => {
                state.users.retain(|u| u.id != id);
                state
            }
            Command::SetLoading(loading) => CollectionState { loading, ..state },
            Command::SetError(error) => CollectionState { error, ..state },
        }
    }
}

/// Keeps the first record for each id and renumbers later repeats to fresh ids.
fn with_unique_ids(users: Vec<User>) -> Vec<User> {
    let mut taken: HashSet<UserId> = users.iter().map(|u| u.id).collect();
    let mut seen = HashSet::with_capacity(users.len());
    users
        .into_iter()
        .map(|user| {
            if seen.insert(user.id) {
                return user;
            }
            let id = next_free_id(&taken);
            taken.insert(id);
            seen.insert(id);
            user.renumbered(id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserDraft;

    fn user(id: u64, name: &str) -> User {
        let login = name.to_lowercase();
        let email = format!("{login}@example.com");
        User::from_draft(id, UserDraft::new(name, login, email))
    }

    fn with_users(users: Vec<User>) -> CollectionState {
        CollectionState {
            users,
            ..CollectionState::default()
        }
    }

    #[test]
    fn test_set_users_replaces_in_order() {
        let state = with_users(vec![user(9, "Old")]);
        let next = UserReducer::reduce(
            state,
            Command::SetUsers(vec![user(2, "B"), user(1, "A")]),
        );

        let ids: Vec<_> = next.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_set_users_renumbers_repeated_ids() {
        let next = UserReducer::reduce(
            CollectionState::default(),
            Command::SetUsers(vec![user(1, "A"), user(1, "Twin"), user(2, "B")]),
        );

        let ids: Vec<_> = next.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(next.users[1].name, "Twin");
        assert_eq!(next.users[1].avatar_url, "https://picsum.photos/seed/3/80/80");
    }

    #[test]
    fn test_add_user_prepends() {
        let state = with_users(vec![user(1, "A"), user(2, "B")]);
        let next = UserReducer::reduce(state, Command::AddUser(user(3, "C")));

        assert_eq!(next.users.len(), 3);
        assert_eq!(next.users[0], user(3, "C"));
    }

    #[test]
    fn test_add_user_with_colliding_id_is_renumbered() {
        let state = with_users(vec![user(1, "A"), user(4, "D")]);
        let next = UserReducer::reduce(state, Command::AddUser(user(1, "Clash")));

        assert_eq!(next.users.len(), 3);
        assert_eq!(next.users[0].name, "Clash");
        assert_eq!(next.users[0].id, 5);
        assert_eq!(next.users[0].avatar_url, "https://picsum.photos/seed/5/80/80");

        let mut ids: Vec<_> = next.users.iter().map(|u| u.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3, "ids must stay unique");
    }

    #[test]
    fn test_add_user_colliding_with_max_id_does_not_overflow() {
        let state = with_users(vec![user(UserId::MAX, "Max")]);
        let next = UserReducer::reduce(state, Command::AddUser(user(UserId::MAX, "Clash")));

        assert_eq!(next.users.len(), 2);
        assert_eq!(next.users[0].id, 1);
        assert_eq!(next.users[1].id, UserId::MAX);
    }

    #[test]
    fn test_update_user_replaces_matching_record() {
        let state = with_users(vec![user(1, "A"), user(2, "B")]);
        let mut changed = user(2, "B");
        changed.name = "Updated".to_string();

        let next = UserReducer::reduce(state, Command::UpdateUser(changed));
        assert_eq!(next.users[1].name, "Updated");
        assert_eq!(next.users[0].name, "A");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let state = with_users(vec![user(1, "A")]);
        let before = state.users.clone();

        let next = UserReducer::reduce(state, Command::UpdateUser(user(42, "Ghost")));
        assert_eq!(next.users, before);
    }

    #[test]
    fn test_delete_user_removes_record() {
        let state = with_users(vec![user(1, "A"), user(2, "B")]);
        let next = UserReducer::reduce(state, Command::DeleteUser(1));

        assert_eq!(next.users.len(), 1);
        assert!(!next.contains(1));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = with_users(vec![user(1, "A")]);
        let next = UserReducer::reduce(state, Command::DeleteUser(7));
        assert_eq!(next.users.len(), 1);
    }

    #[test]
    fn test_delete_shrinks_by_at_most_one_across_sequences() {
        let mut state = CollectionState::default();
        let commands = vec![
            Command::SetUsers(vec![user(1, "A"), user(1, "A2"), user(4, "D")]),
            Command::AddUser(user(1, "A")),
            Command::AddUser(user(2, "B")),
            Command::AddUser(user(1, "Dup")),
            Command::UpdateUser(user(2, "B2")),
            Command::AddUser(user(7, "G")),
        ];
        for command in commands {
            state = UserReducer::reduce(state, command);
        }

        for id in [1, 2, 3, 4, 5, 6, 7, 99] {
            let len = state.users.len();
            let next = UserReducer::reduce(state.clone(), Command::DeleteUser(id));
            assert!(!next.contains(id));
            assert!(len - next.users.len() <= 1);
        }
    }

    #[test]
    fn test_set_loading_and_error() {
        let next = UserReducer::reduce(CollectionState::default(), Command::SetLoading(true));
        assert!(next.loading);

        let next = UserReducer::reduce(next, Command::SetError(Some("oops".to_string())));
        assert_eq!(next.error.as_deref(), Some("oops"));
        assert!(next.loading, "SetError must not touch loading");

        let next = UserReducer::reduce(next, Command::SetError(None));
        assert!(next.error.is_none());
    }

    #[test]
    fn test_add_then_update_leaves_single_record() {
        let state =
            UserReducer::reduce(CollectionState::default(), Command::AddUser(user(1, "A")));
        let mut renamed = user(1, "A");
        renamed.name = "X".to_string();
        let state = UserReducer::reduce(state, Command::UpdateUser(renamed));

        assert_eq!(state.users.len(), 1);
        assert_eq!(state.users[0].name, "X");
    }
}
