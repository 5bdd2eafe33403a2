use salary_analyzer::SurveyResult;

const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Renders the survey as a bordered ASCII table with `title` set into the top border.
/// Rows follow the survey order, an unknown average is left blank.
pub fn render_table(title: &str, survey: &SurveyResult) -> String {
    let header = HEADER.map(String::from);
    let rows = survey
        .iter()
        .map(|entry| {
            [
                entry.language.clone(),
                entry.stats.vacancies_found.to_string(),
                entry.stats.vacancies_processed.to_string(),
                entry
                    .stats
                    .average_salary
                    .map(|salary| salary.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths, None);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border_line(&widths, Some(title)));
    lines.push(row_line(&header, &widths));
    lines.push(border.clone());
    lines.extend(rows.iter().map(|row| row_line(row, &widths)));
    lines.push(border);
    lines.join("\n")
}

fn border_line(widths: &[usize], title: Option<&str>) -> String {
    let inner = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    match title {
        // inner is pure ASCII, so char counts are byte offsets
        Some(title) if title.chars().count() <= inner.len() => {
            format!("+{}{}+", title, &inner[title.chars().count()..])
        }
        _ => format!("+{}+", inner),
    }
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|", cells)
}
