// Player action definitions

/// Represents all actions the movement core reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Slide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Slide);
    }

    #[test]
    fn test_actions_hash_distinctly() {
        let held: std::collections::HashSet<Action> =
            [Action::MoveLeft, Action::MoveRight, Action::Jump, Action::Slide]
                .into_iter()
                .collect();
        assert_eq!(held.len(), 4);
    }
}
