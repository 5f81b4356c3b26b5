pub mod stage1_rounds;
pub mod stage2_categories;
pub mod stage3_participants;
pub mod stage4_standings;
pub mod stage5_report;
