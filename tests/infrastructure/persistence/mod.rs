mod in_memory_status_check_repository_test;
