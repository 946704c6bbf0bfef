use super::*;
use crate::config::AppConfig;
use std::cell::RefCell;

fn recording_context() -> (RenderContext, Rc<RefCell<Vec<String>>>) {
    let reasons = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reasons);
    let ctx = RenderContext::builder()
        .trigger(move |reason: &str| sink.borrow_mut().push(reason.to_owned()))
        .build();
    (ctx, reasons)
}

#[test]
fn state_written_in_one_pass_is_read_back_in_the_next() {
    for count in 0..6usize {
        let mut ctx = RenderContext::new();

        ctx.reset();
        let states: Vec<State<usize>> = (0..count).map(|i| ctx.use_state(i)).collect();
        for (i, state) in states.iter().enumerate() {
            state.set(i * 10 + 1);
        }

        ctx.reset();
        for i in 0..count {
            assert_eq!(ctx.use_state(999usize).get(), i * 10 + 1);
        }
        assert_eq!(ctx.slot_count(), count);
        assert_eq!(ctx.cursor(), count);
    }
}

#[test]
fn initial_value_is_built_only_once() {
    let mut ctx = RenderContext::new();
    let calls = Cell::new(0);

    for _ in 0..3 {
        ctx.reset();
        let state = ctx.use_state_with(|| {
            calls.set(calls.get() + 1);
            String::from("hello")
        });
        assert_eq!(state.get(), "hello");
    }

    assert_eq!(calls.get(), 1);
}

#[test]
fn set_marks_dirty_and_requests_render() {
    let (mut ctx, reasons) = recording_context();
    ctx.reset();
    let state = ctx.use_state(1);
    assert!(!ctx.is_dirty());

    state.set(2);
    let doubled = state.update(|value| {
        *value *= 2;
        *value
    });

    assert_eq!(doubled, 4);
    assert!(ctx.is_dirty());
    assert_eq!(*reasons.borrow(), vec![STATE_CHANGED, STATE_CHANGED]);

    ctx.clear_dirty();
    assert!(!ctx.is_dirty());
}

#[test]
fn reading_a_slot_with_another_type_is_reported() {
    let mut ctx = RenderContext::new();
    ctx.reset();
    ctx.use_state(1i32);

    ctx.reset();
    let err = ctx
        .try_use_state_with(|| String::from("oops"))
        .expect_err("slot 0 holds an i32");

    match err {
        SlotError::TypeMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 0);
            assert!(expected.contains("String"));
            assert_eq!(found, "i32");
        }
    }
}

#[test]
#[should_panic(expected = "hook call order changed")]
fn use_state_panics_on_type_mismatch() {
    let mut ctx = RenderContext::new();
    ctx.reset();
    ctx.use_state(1u8);
    ctx.reset();
    ctx.use_state(false);
}

#[test]
fn child_contexts_are_reused_by_position() {
    let mut ctx = RenderContext::new();

    ctx.reset();
    {
        let child = ctx.use_child_context();
        assert_eq!(child.depth(), 1);
        child.use_state(0).set(5);
    }

    ctx.reset();
    let child = ctx.use_child_context();
    assert_eq!(child.use_state(0).get(), 5);
    assert_eq!(ctx.child_count(), 1);
}

#[test]
fn unvisited_child_keeps_its_state() {
    let mut ctx = RenderContext::new();

    ctx.reset();
    ctx.use_child_context().use_state(0).set(1);
    ctx.use_child_context().use_state(0).set(2);

    ctx.reset();
    assert_eq!(ctx.use_child_context().use_state(0).get(), 1);

    ctx.reset();
    assert_eq!(ctx.use_child_context().use_state(0).get(), 1);
    assert_eq!(ctx.use_child_context().use_state(0).get(), 2);
    assert_eq!(ctx.child_count(), 2);
}

#[test]
fn state_and_child_cursors_are_independent() {
    let mut ctx = RenderContext::new();
    ctx.reset();

    let first = ctx.use_state("a");
    ctx.use_child_context();
    let second = ctx.use_state("b");

    assert_eq!(first.index(), 0);
    assert_eq!(second.index(), 1);
    assert_eq!(ctx.child_count(), 1);
}

#[test]
fn theme_falls_back_through_the_context_tree() {
    let mut plain = RenderContext::new();
    assert_eq!(plain.theme().name, "light");
    assert_eq!(plain.use_child_context().theme().name, "light");

    let defaulted = RenderContext::builder().default_theme(Theme::dark()).build();
    assert_eq!(defaulted.theme().name, "dark");

    let mut ctx = RenderContext::builder().theme(Theme::dark()).build();
    ctx.reset();
    let child = ctx.use_child_context();
    assert_eq!(child.theme().name, "dark");

    child.set_theme(Some(Rc::new(Theme::light())));
    let grandchild = child.use_child_context();
    assert_eq!(grandchild.theme().name, "light");
}

#[test]
fn config_defaults_to_empty_and_is_inherited() {
    let mut ctx = RenderContext::new();
    assert_eq!(ctx.config(), &AppConfig::default());
    assert_eq!(ctx.use_child_context().config().name, "");

    let config = AppConfig {
        name: "demo".into(),
        version: "1.2.0".into(),
        ..AppConfig::default()
    };
    let mut ctx = RenderContext::builder().config(config).build();
    ctx.reset();
    let child = ctx.use_child_context();
    assert_eq!(child.config().name, "demo");
    assert_eq!(child.use_child_context().config().version, "1.2.0");
}

#[test]
fn callback_id_is_stable_while_reregistered() {
    let mut ctx = RenderContext::new();

    ctx.reset();
    let first = ctx.use_callback(|_| {});
    assert_eq!(ctx.purge_unused_callbacks(), 0);

    ctx.reset();
    let second = ctx.use_callback(|_| {});
    assert_eq!(ctx.purge_unused_callbacks(), 0);
    assert_eq!(first, second);
    assert!(ctx.callbacks().contains(first.as_str()));

    ctx.reset();
    assert_eq!(ctx.purge_unused_callbacks(), 1);
    assert!(ctx.callbacks().is_empty());
}

#[test]
fn callbacks_at_different_positions_get_different_ids() {
    let mut ctx = RenderContext::new();
    ctx.reset();
    let a = ctx.use_callback(|_| {});
    let b = ctx.use_callback(|_| {});

    assert_eq!(a.as_str(), "cb_1");
    assert_eq!(b.as_str(), "cb_2");
}

#[test]
fn dispatch_runs_the_latest_closure() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut ctx = RenderContext::new();

    ctx.reset();
    let sink = Rc::clone(&log);
    let id = ctx.use_callback(move |_| sink.borrow_mut().push("first"));

    ctx.reset();
    let sink = Rc::clone(&log);
    ctx.use_callback(move |_| sink.borrow_mut().push("second"));

    ctx.dispatch(id.as_str(), None).expect("callback registered");
    assert_eq!(*log.borrow(), vec!["second"]);

    assert_eq!(
        ctx.dispatch("cb_404", None),
        Err(CallbackError::Unknown {
            id: "cb_404".into()
        })
    );
}

#[test]
fn dispatch_passes_the_payload_through() {
    let seen = Rc::new(RefCell::new(None));
    let mut ctx = RenderContext::new();
    ctx.reset();
    let sink = Rc::clone(&seen);
    let id = ctx.use_callback(move |payload| *sink.borrow_mut() = payload.cloned());

    ctx.dispatch(id.as_str(), Some(&PropValue::from("typed")))
        .expect("callback registered");

    assert_eq!(*seen.borrow(), Some(PropValue::from("typed")));
}

#[test]
fn child_callbacks_share_the_root_registry() {
    let mut ctx = RenderContext::new();
    ctx.reset();
    let id = ctx.use_child_context().use_callback(|_| {});

    // handing out the child must not forget what was used this pass
    ctx.use_child_context();
    assert_eq!(ctx.purge_unused_callbacks(), 0);
    assert!(ctx.callbacks().contains(id.as_str()));
}
