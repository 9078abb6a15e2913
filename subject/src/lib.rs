/*!
A subject/observer registry that never owns its observers

# Design requirements:
- The registry stores weak handles only. Whoever created an observer owns it.
- A weak handle is always upgraded before the observer is touched.
- Expired handles are pruned during the same pass that delivers the notification.
- Registration is keyed by allocation identity, so registering twice is harmless.
- Observers may call back into the registry while being notified.

# Basic usage

```rust
use weak_subject::*;

let subject = Subject::new();
let a = LoggingObserver::new("a");
let b = LoggingObserver::new("b");
subject.register_observer(&a);
subject.register_observer(&b);

subject.set_state(1);
assert_eq!(a.events(), ["Changed state on: 1"]);
assert_eq!(b.events(), ["Changed state on: 1"]);

drop(b);
subject.set_state(2);
assert_eq!(a.events(), ["Changed state on: 1", "Changed state on: 2"]);
assert_eq!(subject.observer_count(), 1);
```

# Self registration

```rust
use weak_subject::*;

let subject = Subject::new();
let observer = CallbackObserver::new(|event: &str| println!("got {event}"));
observer.register_me(&subject);
subject.set_state(7);
```
*/

mod error;
pub mod observer;
mod registry;
mod subject;

pub use error::*;
pub use observer::*;
pub use registry::*;
pub use subject::*;
