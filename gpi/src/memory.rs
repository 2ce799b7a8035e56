use std::{cell::RefCell, rc::Rc};

pub fn make_shared<T>(t: T) -> Shared<T> { Rc::new(RefCell::new(t)) }

/// Single-threaded handle to a value owned jointly by the agent and the
/// episode driver.
pub type Shared<T> = Rc<RefCell<T>>;
