//! Test that #[container] selects the field among several.

use rgb_components::{ComponentContainer, Container};

#[derive(Default, Container)]
struct Player {
    label: &'static str,
    #[container]
    components: ComponentContainer<(u8,)>,
    score: u64,
}

fn main() {
    let mut player = Player {
        label: "steve",
        ..Player::default()
    };
    *player.get_mut::<u8>().unwrap() = 3;
    player.score = 10;

    assert_eq!(player.label, "steve");
    assert_eq!(player.get::<u8>(), Ok(&3));
    assert!(player.is_static::<u8>());
    assert!(!player.is_static::<u64>());
}
