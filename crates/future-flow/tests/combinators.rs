//! Bind and alt fundamentals: firing disciplines, input invalidation, and
//! upstream reclamation.

mod common;

use common::{A, B, Out};
use future_flow::{alt, bind, deliver, receive, Future};

#[test]
fn bind_fires_after_its_single_input() {
    let x = bind((receive::<A>(),), |a: A| Future::from_value(Out::wrapping(&a)));

    assert!(!x.ready());
    assert_eq!(deliver(A::new()), 1);
    assert!(x.ready());
    assert_eq!(x.get().0, "t{a}");
}

#[test]
fn bind_waits_for_every_input() {
    let x = bind((receive::<A>(), receive::<B>()), |a: A, b: B| {
        Future::from_value(Out::pairing(&a, &b))
    });

    assert!(!x.ready());
    assert_eq!(deliver(A::new()), 1);
    assert!(!x.ready());
    assert_eq!(deliver(B::new()), 1);
    assert!(x.ready());
    assert_eq!(x.get().0, "t{ab}");
}

#[test]
fn bind_accepts_the_same_input_twice() {
    let a = receive::<A>();
    let x = bind((a.clone(), a), |first: A, second: A| {
        Future::from_value(Out::pairing(&first, &second))
    });

    assert_eq!(deliver(A::new()), 1);
    assert!(x.ready());
    assert_eq!(x.get().0, "t{aa}");
}

#[test]
fn alt_takes_the_first_input_to_resolve() {
    let x = alt(
        (receive::<A>(), receive::<B>()),
        (
            |a: A| Future::from_value(Out::wrapping(&a)),
            |b: B| Future::from_value(Out::wrapping(&b)),
        ),
    );

    assert!(!x.ready());
    assert_eq!(deliver(B::new()), 1);
    assert!(x.ready());
    assert_eq!(x.get().0, "t{b}");
    assert_eq!(deliver(A::new()), 0);
}

#[test]
fn alt_fires_exactly_once() {
    let x = alt(
        (receive::<A>(), receive::<B>()),
        (
            |a: A| Future::from_value(Out::wrapping(&a)),
            |b: B| Future::from_value(Out::wrapping(&b)),
        ),
    );

    assert_eq!(deliver(A::new()), 1);
    assert_eq!(x.get().0, "t{a}");
    assert_eq!(deliver(B::new()), 0);
    assert_eq!(deliver(A::new()), 0);
    assert_eq!(x.get().0, "t{a}");
}

#[test]
fn ready_inputs_feed_bind_at_construction() {
    let x = bind((Future::from_value(A::new()), receive::<B>()), |a: A, b: B| {
        Future::from_value(Out::pairing(&a, &b))
    });

    assert!(!x.ready());
    assert_eq!(deliver(B::new()), 1);
    assert_eq!(x.get().0, "t{ab}");
}

#[test]
fn an_all_ready_bind_resolves_immediately() {
    let x = bind((Future::from_value(A::new()),), |a: A| {
        Future::from_value(Out::wrapping(&a))
    });

    assert!(x.ready());
    assert_eq!(x.get().0, "t{a}");
}

#[test]
fn a_ready_input_claims_alt_at_construction() {
    let x = alt(
        (Future::from_value(A::new()), receive::<B>()),
        (
            |a: A| Future::from_value(Out::wrapping(&a)),
            |b: B| Future::from_value(Out::wrapping(&b)),
        ),
    );

    assert!(x.ready());
    assert_eq!(x.get().0, "t{a}");
    // The losing input was never subscribed, so nothing kept it alive.
    assert_eq!(deliver(B::new()), 0);
}

#[test]
fn resolution_releases_the_upstream_chain() {
    let x = bind((receive::<A>(),), |a: A| Future::from_value(Out::wrapping(&a)));

    assert_eq!(deliver(A::new()), 1);
    assert_eq!(x.get().0, "t{a}");
    // The receive node was reachable only through x's upstream chain.
    assert_eq!(deliver(A::new()), 0);
}

#[test]
fn a_settled_bind_input_releases_its_subscription() {
    let x = bind((receive::<A>(), receive::<B>()), |a: A, b: B| {
        Future::from_value(Out::pairing(&a, &b))
    });

    assert_eq!(deliver(A::new()), 1);
    // The A input already settled; only the B receive is still pending.
    assert_eq!(deliver(A::new()), 0);
    assert_eq!(deliver(B::new()), 1);
    assert_eq!(x.get().0, "t{ab}");
}

#[test]
fn dropping_the_output_releases_every_input() {
    {
        let _x = bind((receive::<A>(), receive::<B>()), |a: A, b: B| {
            Future::from_value(Out::pairing(&a, &b))
        });
    }
    assert_eq!(deliver(A::new()), 0);
    assert_eq!(deliver(B::new()), 0);
}
