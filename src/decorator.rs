// Decorator by composition: each decorator owns exactly one wrapped
// component and implements the same capability, so chains nest to any
// depth without a shared base class.

use crate::console::Console;

pub trait Component {
    fn operation(&self) -> String;
}

/// Base of every chain: returns a fixed label.
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

/// Computes the wrapped component's result first, then surrounds it
/// with the decorator's own label.
pub struct ComponentDecorator {
    inner: Box<dyn Component>,
}

impl ComponentDecorator {
    // Taking the inner component by value makes a decorator without a
    // wrapped component unrepresentable.
    pub fn new(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }
}

impl Component for ComponentDecorator {
    fn operation(&self) -> String {
        format!("ComponentDecorator({})", self.inner.operation())
    }
}

pub fn demo(out: &dyn Console) {
    let decorated = ComponentDecorator::new(Box::new(ConcreteComponent));
    out.line(&decorated.operation());
}
