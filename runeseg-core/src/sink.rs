//! Output sinks
//!
//! Every conversion routine appends into a [`Sink`], so counting, validating
//! and collecting share a single decode loop and only differ in what the sink
//! does with each produced item.

/// An appendable destination for decoded code points or encoded code units
pub trait Sink<T> {
    /// Append one item
    fn push(&mut self, item: T);
}

impl<T> Sink<T> for Vec<T> {
    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }
}

impl Sink<char> for String {
    #[inline]
    fn push(&mut self, item: char) {
        String::push(self, item);
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    #[inline]
    fn push(&mut self, item: T) {
        (**self).push(item);
    }
}

/// Sink that only counts what it receives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: usize,
}

impl Counter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items pushed so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T> Sink<T> for Counter {
    #[inline]
    fn push(&mut self, _item: T) {
        self.count += 1;
    }
}

/// Sink that drops everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Discard;

impl<T> Sink<T> for Discard {
    #[inline]
    fn push(&mut self, _item: T) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill<S: Sink<u8>>(sink: &mut S) {
        for b in b"abc" {
            sink.push(*b);
        }
    }

    #[test]
    fn test_vec_sink_appends() {
        let mut out = vec![b'x'];
        fill(&mut out);
        assert_eq!(out, b"xabc");
    }

    #[test]
    fn test_counter_sink() {
        let mut counter = Counter::new();
        fill(&mut counter);
        fill(&mut &mut counter);
        assert_eq!(counter.count(), 6);
    }

    #[test]
    fn test_string_sink() {
        let mut s = String::from("a");
        Sink::push(&mut s, 'é');
        assert_eq!(s, "aé");
    }
}
