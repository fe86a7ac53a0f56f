//! Create/edit forms for services and work orders
//!
//! Prompts only collect input. The resulting draft is validated by the
//! caller before it reaches the store.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::theme::Theme;
use dialoguer::{Input, Select};
use paintshop::infrastructure::FsPhotoReader;
use paintshop::presentation::parse_date;
use paintshop::{
    EntityId, FilterCriteria, NewService, NewWorkOrder, PaintshopError, PaintshopResult,
    PhotoDraft, Service, Status, WorkOrder,
};

/// Empty input means no price; a decimal comma is accepted
pub fn parse_price(input: &str) -> PaintshopResult<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let normalized = input.trim_start_matches("R$").trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(Some(price)),
        _ => Err(PaintshopError::InvalidField {
            field: "price",
            message: format!("'{}' is not a number", input),
        }),
    }
}

pub fn parse_hours(input: &str) -> PaintshopResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| PaintshopError::InvalidField {
            field: "estimated_duration_hours",
            message: format!("'{}' is not a whole number of hours", input.trim()),
        })
}

pub fn parse_optional_date(input: &str) -> PaintshopResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

/// Paths separated by `;` or newlines; blanks are dropped
pub fn split_paths(input: &str) -> Vec<PathBuf> {
    input
        .split([';', '\n'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn text(theme: &dyn Theme, prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn validated<T>(
    theme: &dyn Theme,
    prompt: &str,
    initial: &str,
    parse: fn(&str) -> PaintshopResult<T>,
) -> Result<T> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|s: &String| parse(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    Ok(parse(&raw)?)
}

/// Attach, remove and list photos until the user is done
pub fn photo_step(theme: &dyn Theme, draft: &mut PhotoDraft) -> Result<()> {
    let reader = FsPhotoReader::new();
    loop {
        let items = [
            format!("Adicionar fotos ({} anexada(s))", draft.len()),
            "Remover foto".to_string(),
            "Concluir".to_string(),
        ];
        let choice = Select::with_theme(theme)
            .with_prompt("Fotos")
            .items(&items)
            .default(2)
            .interact()?;

        match choice {
            0 => {
                let raw = text(theme, "Arquivos de imagem (separados por ';')", "")?;
                let paths = split_paths(&raw);
                if let Err(e) = draft.ingest(&reader, &paths) {
                    println!("Erro: {}", e);
                }
            }
            1 if !draft.is_empty() => {
                let labels: Vec<String> = draft
                    .photos()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        format!(
                            "Foto {} ({}, {} bytes)",
                            i + 1,
                            p.mime_type().unwrap_or("?"),
                            p.encoded_len()
                        )
                    })
                    .collect();
                if let Some(index) = Select::with_theme(theme)
                    .with_prompt("Remover qual foto?")
                    .items(&labels)
                    .interact_opt()?
                {
                    draft.remove(index);
                }
            }
            1 => println!("Nenhuma foto anexada."),
            _ => return Ok(()),
        }
    }
}

pub fn service_form(theme: &dyn Theme, initial: Option<&Service>) -> Result<NewService> {
    let base = initial.map(NewService::from);
    let name = text(
        theme,
        "Nome do Serviço",
        base.as_ref().map(|b| b.name.as_str()).unwrap_or(""),
    )?;
    let description = text(
        theme,
        "Descrição",
        base.as_ref().map(|b| b.description.as_str()).unwrap_or(""),
    )?;
    let hours_initial = base
        .as_ref()
        .map(|b| b.estimated_duration_hours.to_string())
        .unwrap_or_else(|| "1".to_string());
    let hours = validated(theme, "Duração Estimada (horas)", &hours_initial, parse_hours)?;

    let mut photos = PhotoDraft::from_photos(base.map(|b| b.photos).unwrap_or_default());
    photo_step(theme, &mut photos)?;

    Ok(NewService::new(name, description, hours).with_photos(photos.into_photos()))
}

/// `None` when there is no service to pick
pub fn work_order_form(
    theme: &dyn Theme,
    services: &[Service],
    initial: Option<&WorkOrder>,
) -> Result<Option<NewWorkOrder>> {
    if services.is_empty() {
        println!("Cadastre um serviço antes de abrir ordens de serviço.");
        return Ok(None);
    }
    let base = initial.map(NewWorkOrder::from).unwrap_or_default();

    let client_name = text(theme, "Nome do Cliente", &base.client_name)?;
    let item_description = text(
        theme,
        "Descrição do Item (Ex: Gabinete de Cozinha)",
        &base.item_description,
    )?;
    let paint_color = text(
        theme,
        "Cor da Tinta (Opcional)",
        base.paint_color.as_deref().unwrap_or(""),
    )?;

    let names: Vec<String> = services
        .iter()
        .map(|s| format!("{} ({}h)", s.name, s.estimated_duration_hours))
        .collect();
    let current = services
        .iter()
        .position(|s| s.id == base.service_id)
        .unwrap_or(0);
    let service_index = Select::with_theme(theme)
        .with_prompt("Serviço")
        .items(&names)
        .default(current)
        .interact()?;
    let service_id: EntityId = services[service_index].id.clone();

    let price_initial = base.price.map(|p| format!("{:.2}", p)).unwrap_or_default();
    let price = validated(theme, "Preço (R$)", &price_initial, parse_price)?;

    let date_initial = base
        .scheduled_start_date
        .map(|d| d.to_string())
        .unwrap_or_default();
    let scheduled = validated(
        theme,
        "Data de Início Agendada (Opcional, AAAA-MM-DD)",
        &date_initial,
        parse_optional_date,
    )?;

    let mut photos = PhotoDraft::from_photos(base.photos);
    photo_step(theme, &mut photos)?;

    let mut draft = NewWorkOrder::new(client_name, item_description, service_id)
        .paint_color(paint_color)
        .photos(photos.into_photos());
    draft.price = price;
    draft.scheduled_start_date = scheduled;
    Ok(Some(draft))
}

pub fn filter_form(theme: &dyn Theme, current: &FilterCriteria) -> Result<FilterCriteria> {
    let client_name = text(
        theme,
        "Cliente",
        current.client_name.as_deref().unwrap_or(""),
    )?;
    let paint_color = text(
        theme,
        "Cor da Tinta",
        current.paint_color.as_deref().unwrap_or(""),
    )?;

    let mut statuses = vec!["Todos"];
    statuses.extend(Status::ALL.iter().map(|s| s.label()));
    let current_status = current
        .status
        .and_then(|s| Status::ALL.iter().position(|x| *x == s))
        .map(|i| i + 1)
        .unwrap_or(0);
    let status = Select::with_theme(theme)
        .with_prompt("Status")
        .items(&statuses)
        .default(current_status)
        .interact()?;

    let from_initial = current
        .created_from
        .map(|d| d.to_string())
        .unwrap_or_default();
    let created_from = validated(theme, "Criado Desde", &from_initial, parse_optional_date)?;
    let to_initial = current.created_to.map(|d| d.to_string()).unwrap_or_default();
    let created_to = validated(theme, "Criado Até", &to_initial, parse_optional_date)?;

    Ok(FilterCriteria {
        client_name: Some(client_name).filter(|s| !s.trim().is_empty()),
        paint_color: Some(paint_color).filter(|s| !s.trim().is_empty()),
        status: status.checked_sub(1).map(|i| Status::ALL[i]),
        created_from,
        created_to,
        zone: current.zone,
    })
}
