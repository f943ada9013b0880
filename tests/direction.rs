use glam::IVec2;
use muncher::map::Direction;

#[test]
fn test_enumeration_order_is_the_tie_break_contract() {
    // {+x, -x, +y, -y}
    assert_eq!(
        Direction::DIRECTIONS,
        [Direction::Right, Direction::Left, Direction::Down, Direction::Up]
    );
}

#[test]
fn test_offsets() {
    assert_eq!(Direction::Right.as_ivec2(), IVec2::new(1, 0));
    assert_eq!(Direction::Left.as_ivec2(), IVec2::new(-1, 0));
    assert_eq!(Direction::Down.as_ivec2(), IVec2::new(0, 1));
    assert_eq!(Direction::Up.as_ivec2(), IVec2::new(0, -1));
}

#[test]
fn test_opposites() {
    for direction in Direction::DIRECTIONS {
        assert_eq!(direction.opposite().opposite(), direction);
        assert_eq!(direction.as_ivec2() + direction.opposite().as_ivec2(), IVec2::ZERO);
    }
}

#[test]
fn test_default_facing() {
    assert_eq!(Direction::default(), Direction::Right);
}

#[test]
fn test_lowercase_names() {
    let names: Vec<&str> = Direction::DIRECTIONS.iter().map(|d| d.as_ref()).collect();
    assert_eq!(names, vec!["right", "left", "down", "up"]);
}
