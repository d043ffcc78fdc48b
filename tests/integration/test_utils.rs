//! Shared fixtures for integration tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;
use xml_listing::cli::Prompt;
use xml_listing::error::ApiError;

/// Serializes tests that read or modify process environment variables.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Create `a/f1.txt`, `a/f2.txt`, `b/f3.txt` and `top.txt` under `root`.
pub fn create_sample_tree(root: &Path) {
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a").join("f1.txt"), "one").unwrap();
    fs::write(root.join("a").join("f2.txt"), "two").unwrap();
    fs::write(root.join("b").join("f3.txt"), "three").unwrap();
    fs::write(root.join("top.txt"), "top").unwrap();
}

/// Panic unless every element in `document` is closed in the right order and
/// all character data is properly escaped.
pub fn assert_well_formed(document: &str) {
    let mut stack: Vec<&str> = Vec::new();
    let mut rest = document;

    while let Some(start) = rest.find('<') {
        assert_escaped_text(&rest[..start]);
        let end = rest[start..]
            .find('>')
            .map(|offset| start + offset)
            .unwrap_or_else(|| panic!("unterminated tag in {:?}", &rest[start..]));
        let tag = &rest[start + 1..end];

        if tag.starts_with('?') {
            assert!(stack.is_empty(), "declaration inside an element");
        } else if let Some(name) = tag.strip_prefix('/') {
            let open = stack
                .pop()
                .unwrap_or_else(|| panic!("closing </{}> with nothing open", name));
            assert_eq!(open, name, "mismatched closing tag");
        } else {
            stack.push(tag);
        }
        rest = &rest[end + 1..];
    }

    assert_escaped_text(rest);
    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
}

fn assert_escaped_text(text: &str) {
    assert!(!text.contains('>'), "raw '>' in character data {:?}", text);
    for (index, _) in text.match_indices('&') {
        let entity = &text[index..];
        let known = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&#x"]
            .iter()
            .any(|e| entity.starts_with(e));
        assert!(known, "raw '&' in character data {:?}", text);
    }
}

/// Prompt that replays canned answers and records every question asked.
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    asked: Rc<RefCell<Vec<String>>>,
    before_answer: Option<Box<dyn Fn()>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            asked: Rc::new(RefCell::new(Vec::new())),
            before_answer: None,
        }
    }

    /// Run `hook` each time a question is answered.
    pub fn with_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.before_answer = Some(Box::new(hook));
        self
    }

    /// Shared handle to the questions asked so far.
    pub fn asked(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.asked)
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> Result<bool, ApiError> {
        self.asked.borrow_mut().push(message.to_string());
        if let Some(hook) = &self.before_answer {
            hook();
        }
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(false))
    }
}
