use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use kits::error::{Error, Result};
use kits::feature::{Feature, FeatureSet};
use kits::prompt::{collect_project_spec, unwrap_prompt, PresetAnswers, Prompted, Prompter};
use tempfile::TempDir;

/// Answers prompts from a script and records the questions asked.
#[derive(Default)]
struct ScriptedPrompter {
    texts: RefCell<VecDeque<Prompted<String>>>,
    confirms: RefCell<VecDeque<Prompted<bool>>>,
    selections: RefCell<VecDeque<Prompted<Vec<usize>>>>,
    choices: RefCell<VecDeque<Prompted<usize>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn answer_text(self, answer: Prompted<String>) -> Self {
        self.texts.borrow_mut().push_back(answer);
        self
    }

    fn answer_confirm(self, answer: Prompted<bool>) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    fn answer_multi_select(self, answer: Prompted<Vec<usize>>) -> Self {
        self.selections.borrow_mut().push_back(answer);
        self
    }

    fn answer_select(self, answer: Prompted<usize>) -> Self {
        self.choices.borrow_mut().push_back(answer);
        self
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn text(
        &self,
        message: &str,
        _default: &str,
        validate: &dyn Fn(&str) -> Result<()>,
    ) -> Result<Prompted<String>> {
        self.asked.borrow_mut().push(message.to_string());
        let answer = self.texts.borrow_mut().pop_front().expect("unexpected text prompt");
        if let Prompted::Value(value) = &answer {
            validate(value)?;
        }
        Ok(answer)
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<Prompted<bool>> {
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.confirms.borrow_mut().pop_front().expect("unexpected confirm prompt"))
    }

    fn multi_select(&self, message: &str, items: &[&str]) -> Result<Prompted<Vec<usize>>> {
        assert_eq!(items.len(), Feature::ALL.len());
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.selections.borrow_mut().pop_front().expect("unexpected multi-select prompt"))
    }

    fn select(&self, message: &str, items: &[&str], default: usize) -> Result<Prompted<usize>> {
        assert!(default < items.len());
        self.asked.borrow_mut().push(message.to_string());
        Ok(self.choices.borrow_mut().pop_front().expect("unexpected select prompt"))
    }
}

#[test]
fn test_unwrap_prompt() {
    assert_eq!(unwrap_prompt(Ok(Prompted::Value(3))).unwrap(), 3);
    assert!(matches!(unwrap_prompt::<i32>(Ok(Prompted::Cancelled)), Err(Error::UserCancelled)));
    assert!(matches!(
        unwrap_prompt::<i32>(Err(Error::ValidationError("bad".to_string()))),
        Err(Error::ValidationError(_))
    ));
}

#[test]
fn test_select_goes_through_unwrap_prompt() {
    let prompter = ScriptedPrompter::default()
        .answer_select(Prompted::Value(1))
        .answer_select(Prompted::Cancelled);
    let items = ["npm", "pnpm"];

    assert_eq!(unwrap_prompt(prompter.select("Package manager:", &items, 0)).unwrap(), 1);
    assert!(matches!(
        unwrap_prompt(prompter.select("Package manager:", &items, 0)),
        Err(Error::UserCancelled)
    ));
}

#[test]
fn test_prompts_for_everything_missing() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::default()
        .answer_text(Prompted::Value("  My App ".to_string()))
        .answer_multi_select(Prompted::Value(vec![0, 2]));

    let spec =
        collect_project_spec(&prompter, PresetAnswers::default(), "template-kits", cwd.path())
            .unwrap();

    assert_eq!(spec.project_name, "My App");
    assert_eq!(spec.package_name, "my-app");
    assert_eq!(spec.target_dir, PathBuf::from("My App"));
    assert!(!spec.should_overwrite);
    assert!(spec.features.contains(Feature::UnpluginVueRouter));
    assert!(spec.features.contains(Feature::Vitest));
    assert!(!spec.features.contains(Feature::SimpleGitHooks));
    assert_eq!(prompter.asked().len(), 2);
}

#[test]
fn test_preset_answers_skip_prompts() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::default();
    let preset = PresetAnswers {
        target_dir: Some("demo".to_string()),
        force: false,
        features: Some(FeatureSet::new()),
    };

    let spec = collect_project_spec(&prompter, preset, "template-kits", cwd.path()).unwrap();

    assert_eq!(spec.project_name, "demo");
    assert!(spec.features.is_empty());
    assert!(prompter.asked().is_empty());
}

#[test]
fn test_cancelled_name_prompt() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::default().answer_text(Prompted::Cancelled);

    let result =
        collect_project_spec(&prompter, PresetAnswers::default(), "template-kits", cwd.path());

    assert!(matches!(result, Err(Error::UserCancelled)));
}

#[test]
fn test_non_empty_target_asks_for_confirmation() {
    let cwd = TempDir::new().unwrap();
    fs::create_dir(cwd.path().join("demo")).unwrap();
    fs::write(cwd.path().join("demo/index.html"), "").unwrap();

    let prompter = ScriptedPrompter::default()
        .answer_confirm(Prompted::Value(true))
        .answer_multi_select(Prompted::Value(vec![]));
    let preset = PresetAnswers { target_dir: Some("demo".to_string()), ..Default::default() };

    let spec = collect_project_spec(&prompter, preset, "template-kits", cwd.path()).unwrap();

    assert!(spec.should_overwrite);
    assert!(prompter.asked()[0].starts_with("Target directory \"demo\" is not empty"));
}

#[test]
fn test_declined_overwrite_cancels() {
    let cwd = TempDir::new().unwrap();
    fs::create_dir(cwd.path().join("demo")).unwrap();
    fs::write(cwd.path().join("demo/index.html"), "").unwrap();

    let prompter = ScriptedPrompter::default().answer_confirm(Prompted::Value(false));
    let preset = PresetAnswers { target_dir: Some("demo".to_string()), ..Default::default() };

    let result = collect_project_spec(&prompter, preset, "template-kits", cwd.path());

    assert!(matches!(result, Err(Error::UserCancelled)));
    assert!(cwd.path().join("demo/index.html").exists());
}

#[test]
fn test_force_skips_confirmation() {
    let cwd = TempDir::new().unwrap();
    fs::create_dir(cwd.path().join("demo")).unwrap();
    fs::write(cwd.path().join("demo/index.html"), "").unwrap();

    let prompter = ScriptedPrompter::default();
    let preset = PresetAnswers {
        target_dir: Some("demo".to_string()),
        force: true,
        features: Some(FeatureSet::new()),
    };

    let spec = collect_project_spec(&prompter, preset, "template-kits", cwd.path()).unwrap();

    assert!(spec.should_overwrite);
    assert!(prompter.asked().is_empty());
}

#[test]
fn test_git_only_target_needs_no_confirmation() {
    let cwd = TempDir::new().unwrap();
    fs::create_dir_all(cwd.path().join("demo/.git")).unwrap();

    let prompter = ScriptedPrompter::default().answer_multi_select(Prompted::Value(vec![1]));
    let preset = PresetAnswers { target_dir: Some("demo".to_string()), ..Default::default() };

    let spec = collect_project_spec(&prompter, preset, "template-kits", cwd.path()).unwrap();

    assert!(!spec.should_overwrite);
    assert!(spec.features.contains(Feature::SimpleGitHooks));
}

#[test]
fn test_current_directory_uses_its_name() {
    let cwd = TempDir::new().unwrap();
    let project = cwd.path().join("shop-front");
    fs::create_dir(&project).unwrap();

    let prompter = ScriptedPrompter::default();
    let preset = PresetAnswers {
        target_dir: Some(".".to_string()),
        force: false,
        features: Some(FeatureSet::new()),
    };

    let spec = collect_project_spec(&prompter, preset, "template-kits", &project).unwrap();

    assert_eq!(spec.project_name, "shop-front");
    assert_eq!(spec.package_name, "shop-front");
}
