use yew::prelude::*;

/// Shared open/closed flag for the create-video dialog.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    pub is_open: bool,
    set_open: Callback<bool>,
}

impl ModalContext {
    pub fn close(&self) {
        self.set_open.emit(false);
    }

    /// Callback for buttons: any event opens the dialog.
    pub fn open_callback<IN: 'static>(&self) -> Callback<IN> {
        let set_open = self.set_open.clone();
        Callback::from(move |_| set_open.emit(true))
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    pub children: Children,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let is_open = use_state(|| false);
    let set_open = {
        let is_open = is_open.clone();
        use_callback((), move |open: bool, _| is_open.set(open))
    };

    let context = ModalContext {
        is_open: *is_open,
        set_open,
    };

    html! {
        <ContextProvider<ModalContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ModalContext>>
    }
}

#[hook]
pub fn use_modal() -> ModalContext {
    use_context::<ModalContext>().unwrap_or_else(|| {
        log::warn!("No ModalProvider above this component, modal actions are ignored");
        ModalContext {
            is_open: false,
            set_open: Callback::noop(),
        }
    })
}
