use std::cell::RefCell;
use std::rc::Rc;

/// Line-oriented output sink shared by everything that emits text.
///
/// Every emitted line is recorded in the transcript. A console built with
/// [`Console::stdout`] also writes each line to standard output as it arrives.
/// Clones share the same transcript.
#[derive(Debug, Clone)]
pub struct Console {
    lines: Rc<RefCell<Vec<String>>>,
    echo: bool,
}

impl Console {
    /// Console that prints to standard output
    pub fn stdout() -> Self {
        Self { lines: Rc::new(RefCell::new(Vec::new())), echo: true }
    }

    /// Console that only records lines
    pub fn capture() -> Self {
        Self { lines: Rc::new(RefCell::new(Vec::new())), echo: false }
    }

    pub fn emit(&self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{}", line);
        }
        self.lines.borrow_mut().push(line);
    }

    /// Snapshot of everything emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}
