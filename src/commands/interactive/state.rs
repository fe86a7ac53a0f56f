//! Session state of the interactive console
//!
//! Which screen is open and which filters apply. Kept free of prompts so the
//! navigation rules can be tested without a terminal.

use paintshop::domain::services::ReportKind;
use paintshop::{filter_and_sort, FilterCriteria, View, WorkOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(View),
    AddService,
    EditService,
    DeleteService,
    AddOrder,
    EditOrder,
    OrderActions,
    Filter,
    ClearFilters,
    Export(ReportKind),
    Back,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> String {
        match self {
            MenuAction::Navigate(view) => view.label().to_string(),
            MenuAction::AddService => "Adicionar Serviço".to_string(),
            MenuAction::EditService => "Editar Serviço".to_string(),
            MenuAction::DeleteService => "Excluir Serviço".to_string(),
            MenuAction::AddOrder => "Nova Ordem de Serviço".to_string(),
            MenuAction::EditOrder => "Editar Ordem".to_string(),
            MenuAction::OrderActions => "Detalhes e Ações Rápidas".to_string(),
            MenuAction::Filter => "Filtrar".to_string(),
            MenuAction::ClearFilters => "Limpar Filtros".to_string(),
            MenuAction::Export(kind) => format!("Exportar {} (CSV)", kind.title()),
            MenuAction::Back => "Voltar".to_string(),
            MenuAction::Quit => "Sair".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub view: View,
    pub criteria: FilterCriteria,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action` to the navigation state; returns false on quit
    ///
    /// Actions that need prompts leave the state untouched here.
    pub fn apply(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::Navigate(view) => self.view = view,
            MenuAction::Back => self.view = View::Dashboard,
            MenuAction::ClearFilters => self.criteria.clear(),
            MenuAction::Quit => return false,
            _ => {}
        }
        true
    }

    /// Work orders the list screen shows under the current filters
    pub fn visible_orders<'a>(&self, orders: &'a [WorkOrder]) -> Vec<&'a WorkOrder> {
        filter_and_sort(orders, &self.criteria)
    }

    /// Menu entries of the current screen
    pub fn actions(&self) -> Vec<MenuAction> {
        match self.view {
            View::Dashboard => vec![
                MenuAction::Navigate(View::Services),
                MenuAction::Navigate(View::WorkOrders),
                MenuAction::Navigate(View::Analytics),
                MenuAction::Quit,
            ],
            View::Services => vec![
                MenuAction::AddService,
                MenuAction::EditService,
                MenuAction::DeleteService,
                MenuAction::Export(ReportKind::Catalog),
                MenuAction::Back,
            ],
            View::WorkOrders => {
                let mut actions = vec![
                    MenuAction::AddOrder,
                    MenuAction::OrderActions,
                    MenuAction::EditOrder,
                    MenuAction::Filter,
                ];
                if !self.criteria.is_empty() {
                    actions.push(MenuAction::ClearFilters);
                }
                actions.push(MenuAction::Export(ReportKind::Orders));
                actions.push(MenuAction::Back);
                actions
            }
            View::Analytics => vec![
                MenuAction::Export(ReportKind::Services),
                MenuAction::Export(ReportKind::Status),
                MenuAction::Back,
            ],
        }
    }
}
