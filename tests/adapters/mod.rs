mod system_command_contract;
