/// Action vocabulary with stable integer indices.
pub trait IVocabulary: Send + Sync {
    /// Index of an action, or `None` if the action is unknown.
    fn action_index(&self, name: &str) -> Option<usize>;

    /// All actions in index order.
    fn action_names(&self) -> &[String];

    /// The action that hands control back to the user.
    fn listen_action_name(&self) -> &str;

    /// The low-confidence fallback marker action.
    fn fallback_action_name(&self) -> &str;
}
