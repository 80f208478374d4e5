//! The table style shared by every rendered artifact: a double rule under the titles, light
//! column rules, no outer border.

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};

lazy_static! {
  pub static ref TABLE_DISPLAY_FORMAT: TableFormat =
    FormatBuilder::new()
      .column_separator('│')
      .separator(LinePosition::Title, LineSeparator::new('═', '╪', '═', '═'))
      .separator(LinePosition::Bottom, LineSeparator::new('─', '┴', '─', '─'))
      .padding(1, 1)
      .build();
}
