use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Date,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub class: Option<String>,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    #[props(optional)]
    pub input_type: Option<InputType>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let base = "w-full px-4 py-3 bg-dark-surface border border-border rounded-xl text-foreground focus:outline-none focus:border-primary transition-colors";
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    };

    rsx! {
        input {
            class,
            r#type: props.input_type.unwrap_or(InputType::Text).as_str(),
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FieldProps {
    pub label: &'static str,
    pub children: Element,
}

/// A labelled form row.
#[component]
pub fn Field(props: FieldProps) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium text-foreground mb-2", "{props.label}" }
            {props.children}
        }
    }
}
