use veneer_core::{Callable, Compose, Sink, decorate, from_fn, html_tag};

use crate::{
    Config,
    basics::{add_one, display, square},
    division::{check, div, render},
    reminder::{action, remind, reminder},
};

/// Runs every lesson in order, writing the transcript to `sink`.
pub fn run<S: Sink>(sink: &S, config: &Config) {
    first_class_functions(sink);
    returned_closures(sink);
    tag_factory(sink);
    reminders(sink, config);
    guarded_division(sink, config);
}

fn first_class_functions<S: Sink>(sink: &S) {
    tracing::debug!("lesson: first-class functions");

    // Stored, not called.
    let f = from_fn(square);
    sink.emit(&f.call(5).to_string());

    sink.emit(&add_one(&f, 3).to_string());
}

fn returned_closures<S: Sink>(sink: &S) {
    tracing::debug!("lesson: returned closures");

    let message1 = display("Hi").emit(sink);
    message1.call(());
}

fn tag_factory<S: Sink>(sink: &S) {
    tracing::debug!("lesson: tag factory");

    let print_h1 = html_tag("h1").emit(sink);
    print_h1.call("Test Headline!");
    print_h1.call("Another Headline!");

    let print_p = html_tag("p").emit(sink);
    print_p.call("Test Paragraph!");
}

fn reminders<S: Sink>(sink: &S, config: &Config) {
    tracing::debug!("lesson: reminders");

    remind(action(sink, "sth1"), sink, config.reminder());
    remind(action(sink, "sth2"), sink, config.reminder());

    let action3 = decorate(action(sink, "sth3"), |f| {
        reminder(f, sink, config.reminder())
    });
    action3.call(());
}

fn guarded_division<S: Sink>(sink: &S, config: &Config) {
    tracing::debug!("lesson: guarded division");

    let div_fn = from_fn(div);
    let div_fn = check(div_fn, sink, config.divide_by_zero());
    sink.emit(&render(div_fn.call((10.0, 0.0))));

    let div2 = decorate(from_fn(div), |f| check(f, sink, config.divide_by_zero()));
    sink.emit(&render(div2.call((10.0, 0.0))));
    sink.emit(&render(div2.call((10.0, 2.0))));
}
