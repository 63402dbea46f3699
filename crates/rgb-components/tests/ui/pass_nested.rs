//! Test that derived containers nest and resolve through paths.

use rgb_components::{ComponentContainer, Container, Entity};

#[derive(Default, Container)]
struct SubComponent(ComponentContainer<(i32,)>);

#[derive(Default, Container)]
struct SubSubComponent(ComponentContainer<(SubComponent,)>);

fn main() {
    let mut entity = Entity::<(i32, String, SubComponent, SubSubComponent)>::new();

    *entity.get_mut::<i32>().unwrap() = 1;
    *entity.get_path_mut::<(SubComponent, i32)>().unwrap() = 2;
    *entity
        .get_path_mut::<(SubSubComponent, SubComponent, i32)>()
        .unwrap() = 3;

    assert_eq!(entity.get::<i32>(), Ok(&1));
    assert_eq!(entity.get_path::<(SubComponent, i32)>(), Ok(&2));
    assert_eq!(
        entity.get_path::<(SubSubComponent, SubComponent, i32)>(),
        Ok(&3)
    );
}
