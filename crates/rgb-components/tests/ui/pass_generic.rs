//! Test that generic wrappers forward their slot set.

use rgb_components::{ComponentContainer, Container, Entity, StaticSlots};

#[derive(Default, Container)]
struct Wrapper<S: StaticSlots>(ComponentContainer<S>);

#[derive(Default, Container)]
struct AroundEntity {
    inner: Entity<(i64,)>,
}

fn main() {
    let mut wrapper = Wrapper::<(i64, char)>::default();
    *wrapper.get_mut::<char>().unwrap() = 'x';
    assert_eq!(wrapper.get::<char>(), Ok(&'x'));

    let mut around = AroundEntity::default();
    *around.get_mut::<i64>().unwrap() = -1;
    assert_eq!(around.inner.get::<i64>(), Ok(&-1));
}
