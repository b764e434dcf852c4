//! Labelled input with its inline error

use signup_core::FieldState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub input_type: AttrValue,
    pub value: AttrValue,
    pub state: FieldState,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub node_ref: NodeRef,
    pub on_input: Callback<String>,
    pub on_blur: Callback<()>,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let onblur = props.on_blur.reform(|_: FocusEvent| ());

    let error = props.state.error();
    let input_class = classes!("form-input", error.is_some().then_some("form-input--error"));

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                class={input_class}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                aria-invalid={error.is_some().to_string()}
                ref={props.node_ref.clone()}
                {oninput}
                {onblur}
            />
            if let Some(error) = error {
                <div class="field-error" role="alert">{format!("⚠️ {error}")}</div>
            }
        </div>
    }
}
