use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use dynvec::{DiagnosticSink, LogSink};
use log::{debug, info};

use crate::{Action, AnyArray, Config, ElementKind, Error, Result};

/// State of one interactive run: the arrays created so far and which one is
/// selected.
///
/// Reads one answer per line from `input` and writes prompts and results to
/// `output`. User mistakes are printed as `Error: ...` and the menu keeps
/// going; only I/O failures end [`run`](Self::run) with an error. Running out
/// of input behaves like choosing exit.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    sink: Arc<dyn DiagnosticSink>,
    arrays: Vec<AnyArray>,
    current: Option<usize>,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            sink: Arc::new(LogSink),
            arrays: Vec::new(),
            current: None,
        }
    }

    /// Replaces the default [`LogSink`] that receives length-mismatch diagnostics.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn arrays(&self) -> &[AnyArray] {
        &self.arrays
    }

    /// Index of the selected array, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            if !self.config.quiet {
                self.print_menu()?;
            }

            let Some(line) = self.prompt_line("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let action = match line.parse::<Action>() {
                Ok(Action::Exit) => break,
                Ok(action) => action,
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };

            match self.dispatch(action) {
                Ok(()) => {}
                Err(Error::EndOfInput) => break,
                Err(err) if err.is_recoverable() => self.report(&err)?,
                Err(err) => return Err(err),
            }
        }

        info!("Session ended with {} array(s)", self.arrays.len());
        writeln!(self.output, "Bye")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!("Dispatching {action:?}");
        match action {
            Action::Create => self.create(),
            Action::PushBack => {
                let index = self.current_index()?;
                let raw = self.prompt("Value: ")?;
                self.arrays[index].push_back(&raw)?;
                self.show(index)
            }
            Action::PushFront => {
                let index = self.current_index()?;
                let raw = self.prompt("Value: ")?;
                self.arrays[index].push_front(&raw)?;
                self.show(index)
            }
            Action::Insert => {
                let index = self.current_index()?;
                let pos = self.prompt_number("Position: ")?;
                let raw = self.prompt("Value: ")?;
                self.arrays[index].insert(pos, &raw)?;
                self.show(index)
            }
            Action::Erase => {
                let index = self.current_index()?;
                let pos = self.prompt_number("Position: ")?;
                if !self.arrays[index].erase(pos) {
                    writeln!(self.output, "Nothing to erase at position {pos}")?;
                }
                self.show(index)
            }
            Action::Display => {
                let index = self.current_index()?;
                self.show(index)
            }
            Action::Add => {
                let (left, right) = self.prompt_pair()?;
                let sum = self.arrays[left].add(&self.arrays[right], self.sink.as_ref())?;
                writeln!(self.output, "Result: {sum}")?;
                Ok(())
            }
            Action::Multiply => {
                let (left, right) = self.prompt_pair()?;
                let product =
                    self.arrays[left].multiply(&self.arrays[right], self.sink.as_ref())?;
                writeln!(self.output, "Result: {product}")?;
                Ok(())
            }
            Action::Compare => {
                let (left, right) = self.prompt_pair()?;
                let equal = self.arrays[left].equals(&self.arrays[right])?;
                writeln!(
                    self.output,
                    "Arrays {left} and {right} are {}",
                    if equal { "equal" } else { "not equal" }
                )?;
                Ok(())
            }
            Action::List => self.list(),
            Action::Select => {
                let index = self.prompt_index("Array index: ")?;
                self.current = Some(index);
                self.show(index)
            }
            Action::Delete => self.delete(),
            Action::Exit => Ok(()),
        }
    }

    fn create(&mut self) -> Result<()> {
        for kind in ElementKind::ALL {
            writeln!(self.output, "{}. {kind}", kind.choice())?;
        }
        let raw = self.prompt("Element type: ")?;
        let kind = raw
            .trim()
            .parse()
            .ok()
            .and_then(ElementKind::from_choice)
            .ok_or_else(|| Error::InvalidChoice(raw.clone()))?;
        let size = self.prompt_number("Initial size (0 for empty): ")?;

        let array = AnyArray::new(kind, size)?;
        let index = self.arrays.len();
        self.arrays.push(array);
        self.current = Some(index);
        debug!("Created {kind} array {index} with size {size}");

        writeln!(self.output, "Created array {index}")?;
        self.show(index)
    }

    fn list(&mut self) -> Result<()> {
        if self.arrays.is_empty() {
            writeln!(self.output, "No arrays")?;
            return Ok(());
        }
        for (index, array) in self.arrays.iter().enumerate() {
            let marker = if self.current == Some(index) { '*' } else { ' ' };
            writeln!(
                self.output,
                "{marker} {index}: {} {}",
                array.kind(),
                array.render()
            )?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let index = self.prompt_index("Array index: ")?;
        self.arrays.remove(index);
        self.current = match self.current {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            current => current,
        };
        debug!("Deleted array {index}, current is now {:?}", self.current);
        writeln!(self.output, "Deleted array {index}")?;
        Ok(())
    }

    fn show(&mut self, index: usize) -> Result<()> {
        let array = &self.arrays[index];
        writeln!(
            self.output,
            "Array {index} ({}): {}",
            array.kind(),
            array.render()
        )?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for action in Action::MENU {
            writeln!(self.output, "{}. {}", action.choice(), action.label())?;
        }
        Ok(())
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        debug!("{err:?}");
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }

    fn current_index(&self) -> Result<usize> {
        self.current.ok_or(Error::NoCurrentArray)
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        if index < self.arrays.len() {
            Ok(index)
        } else {
            Err(Error::NoSuchArray {
                index,
                count: self.arrays.len(),
            })
        }
    }

    fn prompt_pair(&mut self) -> Result<(usize, usize)> {
        let left = self.prompt_index("First array index: ")?;
        let right = self.prompt_index("Second array index: ")?;
        Ok((left, right))
    }

    fn prompt_index(&mut self, message: &str) -> Result<usize> {
        let index = self.prompt_number(message)?;
        self.check_index(index)
    }

    fn prompt_number(&mut self, message: &str) -> Result<usize> {
        let raw = self.prompt(message)?;
        raw.trim().parse().map_err(|_| Error::InvalidNumber(raw))
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompt_line(message)?.ok_or(Error::EndOfInput)
    }

    /// Prints `message` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
