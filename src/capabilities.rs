// Capability segregation: narrow movement traits instead of one
// monolithic animal interface, so a type implements only the
// capabilities it actually supports.

use crate::console::Console;

pub trait CanWalk {
    fn walk(&self, out: &dyn Console, distance: u32);
}

pub trait CanSwim {
    fn swim(&self, out: &dyn Console, distance: u32);
}

/// Generic life-cycle actions. Deliberately not a supertrait of the
/// movement capabilities: a water-only type can stay a pure swimmer.
pub trait Animal {
    fn eat(&self, out: &dyn Console);
    fn sleep(&self, out: &dyn Console);
}

/// Land-and-water animal: walks, swims, and carries the life-cycle
/// actions.
pub struct Dog;

impl CanWalk for Dog {
    fn walk(&self, out: &dyn Console, distance: u32) {
        out.line(&format!("Dog walks {} meters", distance));
    }
}

impl CanSwim for Dog {
    fn swim(&self, out: &dyn Console, distance: u32) {
        out.line(&format!("Dog swims {} meters", distance));
    }
}

impl Animal for Dog {
    fn eat(&self, out: &dyn Console) {
        out.line("The dog is eating");
    }

    fn sleep(&self, out: &dyn Console) {
        out.line("The dog is sleeping");
    }
}

/// Water-only animal: implements `CanSwim` and nothing else.
pub struct Fish;

impl CanSwim for Fish {
    fn swim(&self, out: &dyn Console, distance: u32) {
        out.line(&format!("The fish is swimming {} meters", distance));
    }
}

/// Client code written against the narrow contract works for any
/// swimmer, dog or fish alike.
pub fn swim_across(out: &dyn Console, swimmer: &dyn CanSwim, distance: u32) {
    swimmer.swim(out, distance);
}

pub fn demo(out: &dyn Console) {
    let dog = Dog;
    dog.walk(out, 10);
    dog.swim(out, 5);
    dog.eat(out);
    dog.sleep(out);

    let fish = Fish;
    swim_across(out, &fish, 100);
    swim_across(out, &dog, 100);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Memory;

    #[test]
    fn dog_reports_all_actions() {
        let out = Memory::new();
        let dog = Dog;

        dog.walk(&out, 10);
        dog.swim(&out, 5);
        dog.eat(&out);
        dog.sleep(&out);

        assert_eq!(
            out.lines(),
            vec![
                "Dog walks 10 meters",
                "Dog swims 5 meters",
                "The dog is eating",
                "The dog is sleeping",
            ]
        );
    }

    #[test]
    fn fish_swims() {
        let out = Memory::new();
        Fish.swim(&out, 100);
        assert_eq!(out.lines(), vec!["The fish is swimming 100 meters"]);
    }

    #[test]
    fn swim_across_accepts_any_swimmer() {
        let out = Memory::new();
        swim_across(&out, &Dog, 3);
        swim_across(&out, &Fish, 3);
        assert_eq!(
            out.lines(),
            vec!["Dog swims 3 meters", "The fish is swimming 3 meters"]
        );
    }

    #[test]
    fn zero_distance_is_valid() {
        let out = Memory::new();
        Dog.walk(&out, 0);
        assert_eq!(out.lines(), vec!["Dog walks 0 meters"]);
    }

    #[test]
    fn demo_runs_both_animals() {
        let out = Memory::new();
        demo(&out);
        let lines = out.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Dog walks 10 meters");
        assert_eq!(lines[4], "The fish is swimming 100 meters");
        assert_eq!(lines[5], "Dog swims 100 meters");
    }
}
