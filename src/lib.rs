pub mod genet_framework {
    pub mod genet_input;
    pub mod genet_output;
    pub mod genet_file_handler;
    pub mod genet_object;
    pub mod genet_command;
    pub mod graphable;
    pub mod infoable;
    pub mod importable;
    pub mod exportable;
    pub mod activity_key;
}
pub mod genet_commands {
    pub mod genet_command_info;
    pub mod genet_command_penalty;
    pub mod genet_command_sample;
    pub mod genet_command_validate;
    pub mod genet_command_visualise;
}
pub mod genet_objects {
    pub mod event_log;
    pub mod compressed_event_log;
    pub mod population;
    pub mod process_net;
    pub mod transition_catalog;
    pub mod transition_table;
}
pub mod genet_traits {
    pub mod trace_aligner;
}
pub mod techniques {
    pub mod fitness;
    pub mod sample;
    pub mod structural_penalty;
}
pub mod line_reader;
pub mod marking;
