use cli_table::format::{Justify, Separator};
use cli_table::{Cell, CellStruct, Color, ColorChoice, Style, Table, TableStruct, print_stdout};

use rocon_pool::pool::{KnownPlatform, PlatformStatus};

use crate::client::output::outputs::Output;
use crate::common::cli::ColorPolicy;
use crate::scheduler::queue::QueueElement;
use crate::scheduler::simple::Grant;

pub struct CliOutput {
    color_policy: ColorChoice,
}

impl CliOutput {
    pub fn new(color_policy: ColorPolicy) -> CliOutput {
        let color_policy = match color_policy {
            ColorPolicy::Auto => ColorChoice::Auto,
            ColorPolicy::Always => ColorChoice::AlwaysAnsi,
            ColorPolicy::Never => ColorChoice::Never,
        };
        CliOutput { color_policy }
    }

    fn print_horizontal_table(&self, rows: Vec<Vec<CellStruct>>, header: Vec<CellStruct>) {
        let table = rows
            .table()
            .separator(
                Separator::builder()
                    .title(Some(Default::default()))
                    .column(Some(Default::default()))
                    .build(),
            )
            .title(header);
        self.print_table(table);
    }

    fn print_table(&self, table: TableStruct) {
        let table = table.color_choice(self.color_policy);
        if let Err(e) = print_stdout(table) {
            log::error!("Cannot print table to stdout: {e:?}");
        }
    }
}

impl Output for CliOutput {
    fn print_pool(&self, platforms: &[KnownPlatform]) {
        let rows: Vec<_> = platforms
            .iter()
            .map(|platform| {
                vec![
                    platform.identity.as_str().cell(),
                    match platform.status {
                        PlatformStatus::Available => "AVAILABLE"
                            .cell()
                            .foreground_color(Some(Color::Green)),
                        PlatformStatus::Allocated => "ALLOCATED"
                            .cell()
                            .foreground_color(Some(Color::Yellow)),
                    },
                    platform
                        .owner
                        .map(|owner| owner.to_string())
                        .unwrap_or_else(|| "-".to_string())
                        .cell(),
                    platform.capabilities.join("\n").cell(),
                ]
            })
            .collect();
        let header = vec![
            "Platform".cell().bold(true),
            "State".cell().bold(true),
            "Owner".cell().bold(true),
            "Rapps".cell().bold(true),
        ];
        self.print_horizontal_table(rows, header);
    }

    fn print_grants(&self, grants: &[Grant]) {
        let rows: Vec<_> = grants
            .iter()
            .flat_map(|grant| {
                grant.allocations.iter().enumerate().map(move |(i, a)| {
                    vec![
                        grant.request_id.to_string().cell(),
                        i.cell().justify(Justify::Right),
                        a.capability.as_str().cell(),
                        a.identity.as_str().cell(),
                    ]
                })
            })
            .collect();
        let header = vec![
            "Request".cell().bold(true),
            "Item".cell().bold(true),
            "Rapp".cell().bold(true),
            "Platform".cell().bold(true),
        ];
        self.print_horizontal_table(rows, header);
    }

    fn print_waiting(&self, waiting: &[&QueueElement]) {
        let rows: Vec<_> = waiting
            .iter()
            .map(|element| {
                vec![
                    element.sequence.cell().justify(Justify::Right),
                    element.request.id().to_string().cell(),
                    element
                        .request
                        .resources()
                        .iter()
                        .map(|r| r.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                        .cell(),
                ]
            })
            .collect();
        let header = vec![
            "#".cell().bold(true),
            "Waiting request".cell().bold(true),
            "Resources".cell().bold(true),
        ];
        self.print_horizontal_table(rows, header);
    }

    fn print_error(&self, error: anyhow::Error) {
        eprintln!("Error: {error:?}");
    }
}
