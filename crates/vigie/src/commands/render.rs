use colored::Colorize;
use guichet_contracts::technician::responses::{
    AvailabilityStateName, TechnicianBoardResponse, TechnicianStatsResponse,
};

pub fn board(board: &TechnicianBoardResponse) {
    println!("Tableau de service - {}", board.local_time);

    for technician in &board.technicians {
        // Pad before painting, ANSI escapes would throw the column off.
        let label = paint(&format!("{:<12}", technician.label), &technician.color);
        println!(
            "{} {:<24} charge {:<5} tickets ouverts: {}",
            label, technician.full_name, technician.workload_ratio, technician.open_tickets
        );
    }
}

pub fn stats(stats: &TechnicianStatsResponse) {
    println!("{} <{}>", stats.full_name, stats.email);
    if let Some(agency) = &stats.agency {
        println!("Agence: {agency}");
    }
    println!("Spécialité: {}", stats.specialization);
    if let Some(work_hours) = &stats.work_hours {
        println!("Horaires: {work_hours}");
    }
    println!("Statut (selon charge): {}", stats.availability_status);
    println!("Charge: {}", stats.workload_ratio);
    println!();
    println!("Tickets assignés: {}", stats.assigned_tickets_count);
    println!("  en cours: {}", stats.in_progress_tickets_count);
    println!("  résolus: {}", stats.resolved_tickets_count);
    println!("  clôturés: {}", stats.closed_tickets_count);
    println!("Résolus aujourd'hui: {}", stats.resolved_today);
    println!("Résolus ce mois-ci: {}", stats.resolved_this_month);
    println!(
        "Temps moyen de résolution: {} j",
        stats.avg_resolution_time_days
    );
    println!(
        "Temps moyen de première réponse: {} min",
        stats.avg_response_time_minutes
    );
    println!("Taux de réussite: {} %", stats.success_rate);
}

pub fn states(states: &[AvailabilityStateName]) {
    for state in states {
        let label = paint(&format!("{:<12}", state.label), &state.color);
        println!("{} {} ({})", label, state.value, state.color);
    }
}

fn paint(text: &str, hex_color: &str) -> String {
    match parse_hex(hex_color) {
        Some((red, green, blue)) => text.truecolor(red, green, blue).to_string(),
        None => text.to_string(),
    }
}

fn parse_hex(hex_color: &str) -> Option<(u8, u8, u8)> {
    let hex = hex_color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    // get() so a color with a multibyte character degrades to None instead
    // of panicking on a char boundary.
    let red = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let green = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let blue = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

    Some((red, green, blue))
}
