//! Integration tests for question tree traversal

use qmodel::{
    AnswerValue, Inputs, OptionItem, PromptKind, Question, QuestionError, QuestionNode,
    ScriptedInteraction, Validation, traverse,
};

fn mocked(i: usize) -> String {
    format!("mocked value of {i}")
}

fn text(name: &str) -> QuestionNode {
    Question::text(name, format!("Enter {name}")).into()
}

/// A select offering the mocked value plus a second option, so it is always prompted.
fn select(i: usize) -> QuestionNode {
    let options = vec![mocked(i), "other".into()];
    let question = Question::single_select(i.to_string(), format!("Pick {i}"), options);
    question.into()
}

fn steps(ui: &ScriptedInteraction) -> Vec<usize> {
    ui.prompts().iter().filter_map(|p| p.step).collect()
}

#[test]
fn test_flat_sequence_numbers_every_step() {
    let mut root = QuestionNode::group();
    let mut ui = ScriptedInteraction::new();
    for i in 1..=10 {
        root.add_child(text(&i.to_string()));
        ui = ui.with_text(i.to_string(), mocked(i));
    }

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompts().len(), 10);
    for (i, prompt) in ui.prompts().iter().enumerate() {
        assert_eq!(prompt.name, (i + 1).to_string());
        assert_eq!(prompt.kind, PromptKind::Text);
        assert_eq!(prompt.step, Some(i + 1));
        assert_eq!(prompt.total_steps, Some(10));
    }
    for i in 1..=10 {
        assert_eq!(inputs.get_string(&i.to_string()).unwrap(), mocked(i));
    }
    assert!(ui.is_exhausted());
}

#[test]
fn test_cancel_keeps_earlier_answers() {
    let mut root = QuestionNode::group();
    let mut ui = ScriptedInteraction::new();
    for i in 1..=10 {
        root.add_child(text(&i.to_string()));
        ui = if i == 5 {
            ui.with_cancel("5")
        } else {
            ui.with_text(i.to_string(), mocked(i))
        };
    }

    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(ui.prompted_names(), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(inputs.len(), 4);
    for i in 1..=4 {
        assert_eq!(inputs.get_string(&i.to_string()).unwrap(), mocked(i));
    }
    assert!(!inputs.contains("5"));
}

#[test]
fn test_single_option_selects_are_not_prompted() {
    let mut root = QuestionNode::group();
    let mut ui = ScriptedInteraction::new();
    for i in 1..=10 {
        if i % 2 == 0 {
            root.add_child(
                Question::single_select(i.to_string(), "Only one", vec![mocked(i)])
                    .with_skip_single_option(true)
                    .into(),
            );
        } else {
            root.add_child(select(i));
            ui = ui.with_selection(i.to_string(), mocked(i));
        }
    }

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["1", "3", "5", "7", "9"]);
    assert_eq!(steps(&ui), vec![1, 2, 3, 4, 5]);
    for i in 1..=10 {
        assert_eq!(inputs.get_string(&i.to_string()).unwrap(), mocked(i));
    }
}

#[test]
fn test_back_skips_over_automatic_answers() {
    let root = QuestionNode::group()
        .with_child(select(1))
        .with_child(
            Question::single_select("2", "Only one", vec![mocked(2)])
                .with_skip_single_option(true)
                .into(),
        )
        .with_child(select(3))
        .with_child(Question::func("4", |_| Ok(mocked(4).into())).into())
        .with_child(select(5))
        .with_child(select(6));

    let mut ui = ScriptedInteraction::new()
        .with_selection("1", mocked(1))
        .with_selection("1", mocked(1))
        .with_back("3")
        .with_selection("3", mocked(3))
        .with_selection("3", mocked(3))
        .with_back("5")
        .with_selection("5", mocked(5))
        .with_selection("5", mocked(5))
        .with_back("6")
        .with_selection("6", mocked(6));

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(
        ui.prompted_names(),
        vec!["1", "3", "1", "3", "5", "3", "5", "6", "5", "6"]
    );
    assert_eq!(steps(&ui), vec![1, 2, 1, 2, 3, 2, 3, 4, 3, 4]);
    for i in 1..=6 {
        assert_eq!(inputs.get_string(&i.to_string()).unwrap(), mocked(i));
    }
    assert!(ui.is_exhausted());
}

#[test]
fn test_back_from_first_prompt_cancels() {
    let root = QuestionNode::group()
        .with_child(
            Question::single_select("1", "Only one", vec![mocked(1)])
                .with_skip_single_option(true)
                .into(),
        )
        .with_child(Question::func("2", |_| Ok(mocked(2).into())).into())
        .with_child(text("3"));

    let mut ui = ScriptedInteraction::new().with_back("3");

    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    assert!(matches!(err, QuestionError::Cancelled));
    assert_eq!(ui.prompted_names(), vec!["3"]);
    assert_eq!(steps(&ui), vec![1]);
    assert!(inputs.is_empty());
}

#[test]
fn test_return_object_applies_only_to_item_options() {
    let items = |i: usize| {
        vec![
            OptionItem::new(mocked(i), format!("Option {i}")),
            OptionItem::new("other", "Other"),
        ]
    };

    let root = QuestionNode::group()
        .with_child(
            Question::single_select("1", "Items, as object", items(1))
                .with_return_object(true)
                .into(),
        )
        .with_child(
            Question::single_select("2", "Strings, as object", vec![mocked(2), "other".into()])
                .with_return_object(true)
                .into(),
        )
        .with_child(
            Question::multi_select(
                "3",
                "Single item, as objects",
                vec![OptionItem::new(mocked(3), "Option 3")],
            )
            .with_return_object(true)
            .with_skip_single_option(true)
            .into(),
        )
        .with_child(Question::multi_select("4", "Items, as ids", items(4)).into());

    let mut ui = ScriptedInteraction::new()
        .with_selection("1", mocked(1))
        .with_selection("2", mocked(2))
        .with_selections("4", [mocked(4)]);

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["1", "2", "4"]);
    assert_eq!(
        inputs.get_item("1").unwrap(),
        &OptionItem::new(mocked(1), "Option 1")
    );
    assert_eq!(inputs.get("2"), Some(&AnswerValue::String(mocked(2))));
    let item_3 = OptionItem::new(mocked(3), "Option 3");
    assert_eq!(inputs.get("3"), Some(&AnswerValue::ItemList(vec![item_3])));
    let ids_4 = AnswerValue::StringList(vec![mocked(4)]);
    assert_eq!(inputs.get("4"), Some(&ids_4));
}

#[test]
fn test_conditions_follow_parent_string_answer() {
    let mut root = QuestionNode::new(
        Question::single_select("1", "Pick a branch", vec!["2", "3"]).with_return_object(true),
    );
    root.add_child(
        QuestionNode::new(
            Question::single_select("2", "Only one", vec![mocked(2)]).with_skip_single_option(true),
        )
        .with_condition(Validation::equals("2")),
    );
    root.add_child(text("3").with_condition(Validation::equals("3")));

    let mut ui = ScriptedInteraction::new().with_selection("1", "2");

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["1"]);
    assert_eq!(inputs.get("1"), Some(&AnswerValue::String("2".into())));
    assert_eq!(inputs.get_string("2").unwrap(), mocked(2));
    assert!(!inputs.contains("3"));
}

#[test]
fn test_conditions_compare_option_items_by_id() {
    let mut root = QuestionNode::new(
        Question::single_select(
            "1",
            "Pick a branch",
            vec![OptionItem::new("2", "Two"), OptionItem::new("3", "Three")],
        )
        .with_return_object(true),
    );
    root.add_child(text("2").with_condition(Validation::equals("2")));
    root.add_child(text("3").with_condition(Validation::equals("3")));

    let mut ui = ScriptedInteraction::new()
        .with_selection("1", "2")
        .with_text("2", mocked(2));

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["1", "2"]);
    assert_eq!(inputs.get_item("1").unwrap().id, "2");
    assert!(!inputs.contains("3"));
}

#[test]
fn test_failed_condition_skips_whole_subtree() {
    let root = QuestionNode::new(Question::single_select("kind", "Kind", vec!["x", "y"]))
        .with_child(
            text("x-detail")
                .with_condition(Validation::equals("x"))
                .with_child(text("x-more")),
        )
        .with_child(text("always"));

    let mut ui = ScriptedInteraction::new()
        .with_selection("kind", "y")
        .with_text("always", "done");

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["kind", "always"]);
    assert_eq!(inputs.len(), 2);
}

#[test]
fn test_group_condition_sees_earlier_sibling() {
    let tree = || {
        let capability = Question::single_select("capability", "Capability", vec!["bot", "tab"]);
        QuestionNode::group()
            .with_child(capability.into())
            .with_child(
                QuestionNode::group()
                    .with_condition(Validation::func(|value, inputs| {
                        // Group parents have no answer of their own
                        assert!(value.is_none());
                        match inputs.selected_id("capability") {
                            Ok("bot") => Ok(()),
                            _ => Err("not a bot".into()),
                        }
                    }))
                    .with_child(text("bot-name")),
            )
            .with_child(text("app-name"))
    };

    let mut ui = ScriptedInteraction::new()
        .with_selection("capability", "bot")
        .with_text("bot-name", "echo")
        .with_text("app-name", "contoso");
    let mut inputs = Inputs::default();
    traverse(&tree(), &mut inputs, &mut ui).unwrap();
    assert_eq!(
        ui.prompted_names(),
        vec!["capability", "bot-name", "app-name"]
    );

    let mut ui = ScriptedInteraction::new()
        .with_selection("capability", "tab")
        .with_text("app-name", "contoso");
    let mut inputs = Inputs::default();
    traverse(&tree(), &mut inputs, &mut ui).unwrap();
    assert_eq!(ui.prompted_names(), vec!["capability", "app-name"]);
    assert!(!inputs.contains("bot-name"));
}

#[test]
fn test_back_rechecks_skipped_sibling_condition() {
    let root = QuestionNode::group()
        .with_child(Question::single_select("a", "A", vec!["x", "y"]).into())
        .with_child(
            QuestionNode::group()
                .with_condition(Validation::func(|_, inputs| {
                    match inputs.selected_id("a") {
                        Ok("x") => Ok(()),
                        _ => Err("a is not x".into()),
                    }
                }))
                .with_child(text("b")),
        )
        .with_child(text("c"));

    let mut ui = ScriptedInteraction::new()
        .with_selection("a", "y")
        .with_back("c")
        .with_selection("a", "x")
        .with_text("b", "bee")
        .with_text("c", "sea");

    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["a", "c", "a", "b", "c"]);
    assert_eq!(steps(&ui), vec![1, 2, 1, 2, 3]);
    assert_eq!(inputs.get_string("b").unwrap(), "bee");
}

#[test]
fn test_back_past_skipped_node_keeps_its_preset() {
    let root = QuestionNode::group()
        .with_child(text("a"))
        .with_child(text("hidden").with_condition(Validation::func(|_, _| Err("never".into()))))
        .with_child(text("c"));

    let mut inputs = Inputs::default().with("hidden", "caller value");
    let mut ui = ScriptedInteraction::new()
        .with_text("a", "1")
        .with_back("c")
        .with_text("a", "2")
        .with_text("c", "3");
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["a", "c", "a", "c"]);
    assert_eq!(inputs.get_string("hidden").unwrap(), "caller value");
}

#[test]
fn test_root_condition_gates_everything() {
    let root = text("1")
        .with_condition(Validation::equals("x"))
        .with_child(text("2"));

    let mut ui = ScriptedInteraction::new();
    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert!(ui.prompts().is_empty());
    assert!(inputs.is_empty());
}

#[test]
fn test_preset_answers_take_no_step() {
    let mut root = QuestionNode::new(Question::single_select("1", "Preset", vec!["a", "b"]));
    root.add_child(
        Question::multi_select(
            "3",
            "Pick some",
            vec![OptionItem::new("a", "A"), OptionItem::new("b", "B")],
        )
        .with_return_object(true)
        .with_skip_single_option(true)
        .into(),
    );

    let mut inputs = Inputs::default().with("1", OptionItem::new("a", "A"));
    let mut ui = ScriptedInteraction::new().with_selections("3", ["a", "b"]);
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["3"]);
    assert_eq!(ui.prompts()[0].step, Some(1));
    assert_eq!(ui.prompts()[0].total_steps, Some(1));
    assert_eq!(inputs.get_item_list("3").unwrap().len(), 2);
}

#[test]
fn test_preset_parent_still_opens_its_children() {
    let root = QuestionNode::new(Question::single_select("kind", "Kind", vec!["x", "y"]))
        .with_child(text("x-detail").with_condition(Validation::equals("x")))
        .with_child(text("y-detail").with_condition(Validation::equals("y")));

    let mut inputs = Inputs::default().with("kind", "y");
    let mut ui = ScriptedInteraction::new().with_text("y-detail", "why");
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["y-detail"]);
    assert_eq!(ui.prompts()[0].step, Some(1));
}

#[test]
fn test_back_keeps_preset_answers() {
    let root = QuestionNode::group()
        .with_child(text("a"))
        .with_child(text("p"))
        .with_child(text("b"));

    let mut inputs = Inputs::default().with("p", "preset");
    let mut ui = ScriptedInteraction::new()
        .with_text("a", "first")
        .with_back("b")
        .with_text("a", "second")
        .with_text("b", "done");
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["a", "b", "a", "b"]);
    assert_eq!(steps(&ui), vec![1, 2, 1, 2]);
    assert_eq!(inputs.get_string("a").unwrap(), "second");
    assert_eq!(inputs.get_string("p").unwrap(), "preset");
    assert_eq!(inputs.get_string("b").unwrap(), "done");
}

fn nested_tree() -> QuestionNode {
    let branch = QuestionNode::new(Question::single_select("2", "Branch", vec!["a", "b"]))
        .with_child(text("3").with_condition(Validation::equals("a")));
    QuestionNode::group()
        .with_child(text("1").with_child(branch))
        .with_child(text("4"))
}

#[test]
fn test_back_inside_nested_tree() {
    let mut ui = ScriptedInteraction::new()
        .with_text("1", "one")
        .with_selection("2", "a")
        .with_back("3")
        .with_selection("2", "a")
        .with_text("3", "three")
        .with_text("4", "four");

    let mut inputs = Inputs::default();
    traverse(&nested_tree(), &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["1", "2", "3", "2", "3", "4"]);
    assert_eq!(steps(&ui), vec![1, 2, 3, 2, 3, 4]);
    assert_eq!(inputs.len(), 4);
    assert!(ui.is_exhausted());
}

#[test]
fn test_back_then_change_branch() {
    let mut ui = ScriptedInteraction::new()
        .with_text("1", "one")
        .with_selection("2", "a")
        .with_back("3")
        .with_selection("2", "b")
        .with_text("4", "four");

    let mut inputs = Inputs::default();
    traverse(&nested_tree(), &mut inputs, &mut ui).unwrap();

    assert_eq!(ui.prompted_names(), vec!["1", "2", "3", "2", "4"]);
    assert_eq!(inputs.get_string("2").unwrap(), "b");
    assert!(!inputs.contains("3"));
}

#[test]
fn test_func_reads_earlier_answers() {
    let root = QuestionNode::group()
        .with_child(text("app-name"))
        .with_child(
            Question::func("folder", |inputs| {
                Ok(format!("./{}", inputs.get_string("app-name")?).into())
            })
            .into(),
        );

    let mut ui = ScriptedInteraction::new().with_text("app-name", "contoso");
    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    assert_eq!(inputs.get_string("folder").unwrap(), "./contoso");
}

#[test]
fn test_func_error_stops_traversal() {
    let root = QuestionNode::group()
        .with_child(text("1"))
        .with_child(Question::func("2", |_| Err(anyhow::anyhow!("boom"))).into())
        .with_child(text("3"));

    let mut ui = ScriptedInteraction::new().with_text("1", mocked(1));
    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    match err {
        QuestionError::Callback { name, source } => {
            assert_eq!(name, "2");
            assert_eq!(source.to_string(), "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(inputs.get_string("1").unwrap(), mocked(1));
    assert_eq!(ui.prompted_names(), vec!["1"]);
}

#[test]
fn test_dynamic_options_resolve_from_answers() {
    let root = QuestionNode::group()
        .with_child(Question::single_select("language", "Language", vec!["ts", "py"]).into())
        .with_child(
            Question::single_select("framework", "Framework", Vec::<String>::new())
                .with_dynamic_options(|inputs| {
                    Ok(match inputs.selected_id("language")? {
                        "ts" => vec!["react", "vue"].into(),
                        _ => vec!["flask"].into(),
                    })
                })
                .with_skip_single_option(true)
                .into(),
        );

    let mut ui = ScriptedInteraction::new()
        .with_selection("language", "ts")
        .with_selection("framework", "vue");
    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();
    assert_eq!(ui.prompts()[1].options, vec!["react", "vue"]);
    assert_eq!(inputs.get_string("framework").unwrap(), "vue");

    let mut ui = ScriptedInteraction::new().with_selection("language", "py");
    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();
    assert_eq!(ui.prompted_names(), vec!["language"]);
    assert_eq!(inputs.get_string("framework").unwrap(), "flask");
}

#[test]
fn test_prompted_selects_carry_the_skip_flag() {
    let root = QuestionNode::group()
        .with_child(select(1))
        .with_child(
            Question::single_select("2", "Two options", vec!["a", "b"])
                .with_skip_single_option(true)
                .into(),
        )
        .with_child(
            Question::multi_select("3", "Two options", vec!["a", "b"])
                .with_skip_single_option(true)
                .into(),
        );

    let mut ui = ScriptedInteraction::new()
        .with_selection("1", mocked(1))
        .with_selection("2", "b")
        .with_selections("3", ["a"]);
    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    let flags: Vec<bool> = ui.prompts().iter().map(|p| p.skip_single_option).collect();
    assert_eq!(flags, vec![false, true, true]);
    assert_eq!(inputs.get_string("2").unwrap(), "b");
}

#[test]
fn test_empty_options_is_an_error() {
    let root: QuestionNode =
        Question::single_select("framework", "Framework", Vec::<String>::new()).into();

    let mut ui = ScriptedInteraction::new();
    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    assert!(matches!(err, QuestionError::EmptyOptions { name } if name == "framework"));
    assert!(ui.prompts().is_empty());
}

#[test]
fn test_unknown_option_is_an_error() {
    let root = select(1);

    let mut ui = ScriptedInteraction::new().with_selection("1", "nope");
    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    match err {
        QuestionError::UnknownOption { name, id } => {
            assert_eq!(name, "1");
            assert_eq!(id, "nope");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!inputs.contains("1"));
}

#[test]
fn test_file_and_folder_prompts() {
    let root = QuestionNode::group()
        .with_child(Question::single_file("manifest", "Manifest file").into())
        .with_child(Question::multi_file("assets", "Asset files").into())
        .with_child(
            Question::folder("folder", "Project folder")
                .with_default("./app")
                .into(),
        );

    let mut ui = ScriptedInteraction::new()
        .with_file("manifest", "manifest.json")
        .with_files("assets", ["color.png", "outline.png"])
        .with_folder("folder", "./contoso");
    let mut inputs = Inputs::default();
    traverse(&root, &mut inputs, &mut ui).unwrap();

    let kinds: Vec<PromptKind> = ui.prompts().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![PromptKind::File, PromptKind::Files, PromptKind::Folder]
    );
    assert_eq!(inputs.get_string("manifest").unwrap(), "manifest.json");
    assert_eq!(
        inputs.get_string_list("assets").unwrap(),
        ["color.png", "outline.png"]
    );
    assert_eq!(inputs.get_string("folder").unwrap(), "./contoso");
}

#[test]
fn test_text_validation_failure_surfaces_from_script() {
    let root: QuestionNode = Question::text("app-name", "Application name")
        .with_validation(Validation::MinLength(3))
        .into();

    let mut ui = ScriptedInteraction::new().with_text("app-name", "ab");
    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    assert!(matches!(err, QuestionError::Backend(_)));
    assert!(err.to_string().contains("Validation failed for 'app-name'"));
    assert!(inputs.is_empty());
}

#[test]
fn test_missing_reply_is_a_backend_error() {
    let root = text("1");

    let mut ui = ScriptedInteraction::new();
    let mut inputs = Inputs::default();
    let err = traverse(&root, &mut inputs, &mut ui).unwrap_err();

    assert!(!err.is_cancelled());
    let message = err.to_string();
    assert!(message.contains("No scripted reply left for question: 1"));
}
