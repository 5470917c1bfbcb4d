use veneer_core::{Callable, Compose, Recorder, Sink, decorate, from_fn};
use veneer_lessons::{
    Config,
    basics::{add_one, square},
    division::{check, div},
    reminder::{action, reminder},
    run,
};

#[test]
fn full_transcript() {
    let out = Recorder::new();

    run(&out, &Config::default());

    assert_eq!(
        out.lines(),
        [
            "25",
            "10",
            "Display: Hi",
            "<h1>Test Headline!</h1>",
            "<h1>Another Headline!</h1>",
            "<p>Test Paragraph!</p>",
            "I want to buy sth1",
            "Don't forget...",
            "I want to buy sth2",
            "Don't forget...",
            "I want to buy sth3",
            "Don't forget...",
            "Can't divide by 0",
            "None",
            "Can't divide by 0",
            "None",
            "5.0",
        ]
    );
}

#[test]
fn running_twice_repeats_the_transcript() {
    let out = Recorder::new();
    let config = Config::default();

    run(&out, &config);
    let first = out.take();
    run(&out, &config);

    assert_eq!(out.lines(), first);
}

#[test]
fn scenario_values() {
    let out = Recorder::new();
    let div2 = decorate(from_fn(div), |f| check(f, &out, "Can't divide by 0"));

    assert_eq!(square(5), 25);
    assert_eq!(add_one(from_fn(square), 3), 10);
    assert_eq!(div2.call((10.0, 0.0)), None);
    assert_eq!(out.take(), ["Can't divide by 0"]);
    assert_eq!(div2.call((10.0, 2.0)), Some(5.0));
    assert!(out.lines().is_empty());
}

#[test]
fn guarded_reminder_nests_outer_first() {
    let out = Recorder::new();

    let shout = from_fn(|(a, b): (f64, f64)| {
        out.emit("dividing");
        a / b
    });
    let wrapped = reminder(check(shout, &out, "skip"), &out, "after")
        .around(|_| out.emit("before"), |_| {});

    assert_eq!(wrapped.call((1.0, 0.0)), None);
    assert_eq!(wrapped.call((1.0, 2.0)), Some(0.5));
    assert_eq!(
        out.lines(),
        ["before", "skip", "after", "before", "dividing", "after"]
    );
}

#[test]
fn action_stays_usable_after_being_reminded_by_reference() {
    let out = Recorder::new();
    let milk = action(&out, "milk");
    let reminded = reminder(&milk, &out, "Don't forget...");

    milk.call(());
    reminded.call(());
    reminded.call(());
    milk.call(());

    assert_eq!(
        out.lines(),
        [
            "I want to buy milk",
            "I want to buy milk",
            "Don't forget...",
            "I want to buy milk",
            "Don't forget...",
            "I want to buy milk",
        ]
    );
}
