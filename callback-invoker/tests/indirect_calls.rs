// Exercises the public API with actions that record instead of print
use callback_invoker::{use_it, write_value, Proc, INVOKE_ARG};
use std::cell::RefCell;

thread_local! {
    static OUTPUT: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// Same output format as `do_it`, but into a per-thread buffer
fn print_to_buffer(value: i32) {
    OUTPUT.with(|out| write_value(&mut *out.borrow_mut(), value).unwrap());
}

fn take_output() -> String {
    OUTPUT.with(|out| String::from_utf8(std::mem::take(&mut *out.borrow_mut())).unwrap())
}

#[test]
fn stored_and_direct_references_are_equivalent() {
    let ptr: Proc = print_to_buffer;
    use_it(ptr);
    let via_stored = take_output();

    use_it(print_to_buffer);
    let via_direct = take_output();

    assert_eq!(via_stored, "0\n");
    assert_eq!(via_stored, via_direct);
}

#[test]
fn demonstration_sequence_prints_two_zero_lines() {
    let ptr: Proc = print_to_buffer;
    use_it(ptr);
    use_it(print_to_buffer);

    assert_eq!(take_output(), "0\n0\n");
}

#[test]
fn invoker_ignores_action_state() {
    // The invoker always passes the same literal, whatever the action did before
    print_to_buffer(17);
    use_it(print_to_buffer);

    assert_eq!(take_output(), format!("17\n{}\n", INVOKE_ARG));
}
