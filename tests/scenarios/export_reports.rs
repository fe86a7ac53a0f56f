//! Scenario: exporting reports
//!
//! Journey: the owner narrows the order list, exports it, and downloads
//! the analytics tables behind the dashboard charts.

use paintshop::application::ExportOutcome;
use paintshop::domain::services::ReportKind;
use paintshop::infrastructure::{FileExportSink, MemoryExportSink};
use paintshop::{filter_and_sort, CalendarZone, ExportUseCase, FilterCriteria};

use crate::common::*;

fn all_orders(store: &TestStore) -> Vec<&paintshop::WorkOrder> {
    store.work_orders().iter().collect()
}

/// SCENARIO: status distribution of the seed
#[test]
fn scenario_status_report() {
    let store = seeded_store();
    let use_case = ExportUseCase::new(MemoryExportSink::new());

    use_case
        .export_report(ReportKind::Status, store.services(), &all_orders(&store))
        .unwrap();

    let artifacts = use_case.sink().artifacts();
    assert_eq!(artifacts[0].filename, "status_ordens_servico.csv");
    insta::assert_snapshot!(&artifacts[0].text, @r"
    Status,Quantidade
    Pendente,2
    Em Andamento,1
    Concluído,1
    Cancelado,1
    ");
}

/// SCENARIO: service distribution of the seed
#[test]
fn scenario_service_report() {
    let store = seeded_store();
    let use_case = ExportUseCase::new(MemoryExportSink::new());

    use_case
        .export_report(ReportKind::Services, store.services(), &all_orders(&store))
        .unwrap();

    let artifacts = use_case.sink().artifacts();
    insta::assert_snapshot!(&artifacts[0].text, @r"
    Serviço,Quantidade
    Aplicação de Primer,1
    Pintura Base (Laca),2
    Aplicação de Verniz,1
    Polimento Técnico,1
    ");
}

/// SCENARIO: filtered order list written to disk
#[test]
fn scenario_filtered_orders_to_directory() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let use_case = ExportUseCase::new(FileExportSink::new(dir.path().join("relatorios")))
        .in_zone(CalendarZone::utc());

    let criteria = FilterCriteria::new().client_name("silva");
    let visible = filter_and_sort(store.work_orders(), &criteria);
    let outcome = use_case
        .export_report(ReportKind::Orders, store.services(), &visible)
        .unwrap();

    assert!(matches!(outcome, ExportOutcome::Delivered { rows: 1, .. }));
    let text = read_file(&dir.path().join("relatorios/ordens_servico.csv"));
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Cliente,Item,Serviço,Cor da Tinta,Preço (R$),Status,Criado,Agendado,Iniciado,Concluído")
    );
    assert_eq!(
        lines.next(),
        Some("wo-1,João Silva,Gabinete Cozinha (5 portas),Pintura Base (Laca),Preto Ninja,1200,Concluído,2023-11-01,2023-11-01,2023-11-01,2023-11-01")
    );
    assert_eq!(lines.next(), None);
}

/// SCENARIO: nothing to export is a notice, not an error
#[test]
fn scenario_nothing_to_export() {
    let store = seeded_store();
    let use_case = ExportUseCase::new(MemoryExportSink::new());
    let criteria = FilterCriteria::new().client_name("ninguém");
    let visible = filter_and_sort(store.work_orders(), &criteria);

    let outcome = use_case
        .export_report(ReportKind::Orders, store.services(), &visible)
        .unwrap();

    assert_eq!(outcome, ExportOutcome::NothingToExport);
    assert_eq!(outcome.notice(), "Não há dados para exportar.");
    assert!(use_case.sink().artifacts().is_empty());
}
