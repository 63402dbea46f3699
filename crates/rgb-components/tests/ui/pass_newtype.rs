//! Test that single-field structs delegate to their only field.

use rgb_components::{ComponentContainer, Container};

#[derive(Default, Container)]
struct Named {
    components: ComponentContainer<(u32,)>,
}

#[derive(Default, Container)]
struct Tuple(ComponentContainer<(u32, bool)>);

fn main() {
    let mut named = Named::default();
    *named.get_mut::<u32>().unwrap() = 5;
    assert_eq!(named.get::<u32>(), Ok(&5));

    let mut tuple = Tuple::default();
    *tuple.get_static_mut::<bool, _>() = true;
    assert_eq!(tuple.get::<bool>(), Ok(&true));
    assert!(tuple.add(String::from("dynamic")).unwrap().is_none());
}
