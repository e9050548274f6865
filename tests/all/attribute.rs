use crate::{TestError, init, values2};
use shortcircuit::{Error, Result, attempt, boundary, check, ensure, must};
use std::panic;

#[boundary]
fn sum_pair(ok: bool) -> Result<i32> {
    let (a, b) = attempt(values2(ok)).or("summing");
    Ok(a + b)
}

#[test]
fn attribute_installs_boundary() {
    init();
    assert_eq!(sum_pair(true).unwrap(), 2);
    let err = sum_pair(false).unwrap_err();
    assert_eq!(err.to_string(), "summing: failed");
    assert!(err.is::<TestError>());
}

#[boundary]
fn first_word(text: &str) -> Result<&str> {
    let word = text.split_whitespace().next();
    ensure(word.is_some(), "no words");
    Ok(word.unwrap_or_default())
}

#[test]
fn attribute_with_borrowed_return() {
    init();
    assert_eq!(first_word("hello world").unwrap(), "hello");
    assert_eq!(first_word("   ").unwrap_err().to_string(), "no words");
}

#[boundary]
fn evens(limit: u32) -> Result<impl Iterator<Item = u32>> {
    ensure!(limit <= 100, "limit {limit} too large");
    Ok((0..limit).filter(|n| n % 2 == 0))
}

#[test]
fn attribute_with_opaque_return() {
    init();
    assert_eq!(evens(7).unwrap().collect::<Vec<_>>(), [0, 2, 4, 6]);
    assert_eq!(
        evens(101).err().map(|e| e.to_string()).as_deref(),
        Some("limit 101 too large")
    );
}

struct Counter {
    hits: u32,
}

impl Counter {
    #[boundary]
    fn bump(&mut self, fail: Option<TestError>) -> Result<u32> {
        self.hits += 1;
        check(fail);
        self.hits += 1;
        Ok(self.hits)
    }
}

#[test]
fn attribute_on_methods() {
    init();
    let mut counter = Counter { hits: 0 };
    assert_eq!(counter.bump(None).unwrap(), 2);
    assert!(counter.bump(Some(TestError)).is_err());
    assert_eq!(counter.hits, 3);
}

#[boundary]
fn early_return(x: i32) -> Result<i32> {
    if x == 0 {
        return Ok(0);
    }
    let parsed: i32 = "10".parse()?;
    Ok(must(parsed.checked_div(x).ok_or_else(|| Error::msg("overflow"))))
}

#[test]
fn attribute_keeps_return_and_question_mark() {
    init();
    assert_eq!(early_return(0).unwrap(), 0);
    assert_eq!(early_return(5).unwrap(), 2);
    assert_eq!(early_return(-1).unwrap(), -10);
}

mod renamed {
    pub use shortcircuit as sc;
}

#[boundary(crate = renamed::sc)]
fn through_renamed_path() -> Result<()> {
    check(Some(TestError));
    Ok(())
}

#[test]
fn attribute_with_crate_path() {
    init();
    assert_eq!(through_renamed_path().unwrap_err().to_string(), "failed");
}

#[boundary]
fn panics() -> Result<()> {
    panic!("not ours")
}

#[test]
fn attribute_does_not_swallow_panics() {
    init();
    let payload = panic::catch_unwind(panics).unwrap_err();
    assert_eq!(payload.downcast_ref::<&'static str>(), Some(&"not ours"));
}
