//! Confirmation step for destructive actions.
//!
//! Operations take `impl FnOnce(&str) -> bool`; the UI passes [`confirm`],
//! tests pass a closure.

/// Simple confirm dialog via browser; `false` when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub const CONFIRM_DELETE_GUIDE: &str = "Tem certeza que deseja excluir esta guia?";
pub const CONFIRM_RESET_FORM: &str = "Deseja limpar todos os dados do formulário?";
pub const CONFIRM_DELETE_SUPPLIER: &str = "ATENÇÃO: Esta ação excluirá o fornecedor e TODAS as guias associadas a ele. Tem certeza que deseja continuar?";
