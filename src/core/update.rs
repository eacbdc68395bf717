use crate::core::{GameChangeType, GameState, GameUpdate, SharedGameState, UserAction};

/// Resolve one action against a state without touching it.
///
/// Bumping into a wall, pushing a box into a wall or another box, and stepping
/// off the board all come back as `NoChange`. `Reset` needs the initial
/// snapshot, so it is handled by the engine and is also `NoChange` here.
pub fn step(shared: &SharedGameState, game: &GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.offset(),
        UserAction::Reset => return GameUpdate::NoChange,
    };

    let next = game.player + dir;
    if shared.is_blocked(&next) {
        return GameUpdate::NoChange;
    }

    let pushing = game.has_box(&next);
    let beyond = next + dir;
    if pushing && (shared.is_blocked(&beyond) || game.has_box(&beyond)) {
        return GameUpdate::NoChange;
    }

    let mut boxes = game.boxes.clone();
    if pushing {
        // player steps into the box's old cell
        boxes.remove(&next);
        boxes.insert(beyond);
    }

    GameUpdate::NextState(
        GameState {
            boxes,
            player: next,
        },
        if pushing {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        },
    )
}
