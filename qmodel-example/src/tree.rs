//! The "create a new Teams app" question tree.

use std::path::Path;

use qmodel::{
    AnswerValue, Inputs, OptionItem, Platform, Question, QuestionNode, StaticOptions, Validation,
};

pub const CAPABILITY: &str = "capability";
pub const BOT_TEMPLATE: &str = "bot-template";
pub const NOTIFICATION_TRIGGERS: &str = "notification-triggers";
pub const TAB_KIND: &str = "tab-kind";
pub const ME_KIND: &str = "me-kind";
pub const LANGUAGE: &str = "programming-language";
pub const APP_NAME: &str = "app-name";
pub const FOLDER: &str = "folder";
pub const PROJECT_PATH: &str = "project-path";

fn capabilities() -> Vec<OptionItem> {
    vec![
        OptionItem::new("bot", "Bot")
            .with_description("Conversational agent for chats and channels"),
        OptionItem::new("tab", "Tab").with_description("Web page embedded in Teams"),
        OptionItem::new("message-extension", "Message Extension")
            .with_description("Search or act on messages from the compose box"),
    ]
}

fn bot_questions() -> QuestionNode {
    let template = Question::single_select(
        BOT_TEMPLATE,
        "Bot template",
        vec![
            OptionItem::new("echo", "Basic bot"),
            OptionItem::new("command", "Chat command"),
            OptionItem::new("notification", "Chat notification message"),
        ],
    )
    .with_default("echo");

    QuestionNode::new(template)
        .with_condition(Validation::equals("bot"))
        .with_child(
            QuestionNode::new(
                Question::multi_select(
                    NOTIFICATION_TRIGGERS,
                    "Notification triggers",
                    vec![
                        OptionItem::new("http", "HTTP request"),
                        OptionItem::new("timer", "Timer schedule"),
                    ],
                )
                .with_default("http"),
            )
            .with_condition(Validation::equals("notification")),
        )
}

fn tab_questions() -> QuestionNode {
    QuestionNode::new(Question::single_select(
        TAB_KIND,
        "Tab type",
        vec![
            OptionItem::new("react", "React with Fluent UI"),
            OptionItem::new("basic", "Basic tab"),
        ],
    ))
    .with_condition(Validation::equals("tab"))
}

fn message_extension_questions() -> QuestionNode {
    QuestionNode::new(
        Question::single_select(
            ME_KIND,
            "Message extension type",
            vec![OptionItem::new("search", "Search results")],
        )
        .with_skip_single_option(true),
    )
    .with_condition(Validation::equals("message-extension"))
}

/// Languages on offer depend on the platform; Visual Studio only scaffolds C#.
fn languages(inputs: &Inputs) -> anyhow::Result<StaticOptions> {
    Ok(match inputs.platform {
        Platform::VS => vec![OptionItem::new("csharp", "C#")].into(),
        _ => vec![
            OptionItem::new("typescript", "TypeScript"),
            OptionItem::new("javascript", "JavaScript"),
            OptionItem::new("python", "Python"),
        ]
        .into(),
    })
}

fn check_app_name(value: Option<&AnswerValue>, _inputs: &Inputs) -> Result<(), String> {
    let name = value.and_then(AnswerValue::as_str).unwrap_or_default();
    let mut chars = name.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err("application name must start with a letter".to_string());
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err("application name may only contain letters, digits, '-' and '_'".to_string());
    }
    if name.len() > 30 {
        return Err("application name must be at most 30 characters long".to_string());
    }
    Ok(())
}

fn project_path(inputs: &Inputs) -> anyhow::Result<AnswerValue> {
    let folder = inputs.get_string(FOLDER)?;
    let name = inputs.get_string(APP_NAME)?;
    Ok(Path::new(folder).join(name).display().to_string().into())
}

/// Build the question tree for scaffolding a new app, trimmed and checked.
pub fn new_app_tree() -> anyhow::Result<QuestionNode> {
    let mut root = QuestionNode::group();

    let capability = Question::single_select(CAPABILITY, "Capability", capabilities());
    root.add_child(
        QuestionNode::new(capability)
            .with_child(bot_questions())
            .with_child(tab_questions())
            .with_child(message_extension_questions()),
    );

    root.add_child(
        Question::single_select(LANGUAGE, "Programming language", Vec::<String>::new())
            .with_dynamic_options(languages)
            .with_skip_single_option(true)
            .into(),
    );

    root.add_child(
        Question::text(APP_NAME, "Application name")
            .with_placeholder("e.g. contoso-helpdesk")
            .with_validation(Validation::func(check_app_name))
            .into(),
    );

    root.add_child(
        Question::folder(FOLDER, "Workspace folder")
            .with_default(".")
            .into(),
    );

    root.add_child(Question::func(PROJECT_PATH, project_path).into());

    // Groups that end up with nothing left to ask disappear here
    let root = root
        .trim()
        .ok_or_else(|| anyhow::anyhow!("question tree is empty"))?;
    root.validate()?;
    Ok(root)
}
